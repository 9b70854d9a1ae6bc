//! # CountryList Component
//!
//! Scrollable list of the visible window. Follows the persistent state +
//! transient wrapper pattern:
//! - `CountryListState` lives in `TuiState` (selection survives redraws)
//! - `CountryListView` is created each frame with borrowed state and rows
//!
//! Moving the selection emits `ListEvent::Moved` so the event loop can
//! ask the core to grow the window when the cursor nears its end.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::country::Country;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Rows skipped by PageUp / PageDown.
const PAGE_JUMP: usize = 10;

const NAME_WIDTH: usize = 28;
const CAPITAL_WIDTH: usize = 20;
const REGION_WIDTH: usize = 10;

/// Events emitted by the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Moved(usize),
    Open(usize),
}

#[derive(Debug, Default)]
pub struct CountryListState {
    pub list_state: ListState,
    len: usize,
}

impl CountryListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keeps the selection inside a list of `len` rows.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (_, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    /// Back to the top (after the filter changed).
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        let len = self.len;
        self.sync(len);
    }

    fn move_to(&mut self, index: usize) -> Option<ListEvent> {
        if self.len == 0 {
            return None;
        }
        let index = index.min(self.len - 1);
        self.list_state.select(Some(index));
        Some(ListEvent::Moved(index))
    }
}

impl EventHandler for CountryListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        let current = self.list_state.selected().unwrap_or(0);
        match event {
            TuiEvent::CursorUp => self.move_to(current.saturating_sub(1)),
            TuiEvent::CursorDown => self.move_to(current + 1),
            TuiEvent::PageUp => self.move_to(current.saturating_sub(PAGE_JUMP)),
            TuiEvent::PageDown => self.move_to(current + PAGE_JUMP),
            TuiEvent::Home => self.move_to(0),
            TuiEvent::End => self.move_to(self.len.saturating_sub(1)),
            TuiEvent::Submit => self.list_state.selected().map(ListEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the country list.
pub struct CountryListView<'a> {
    state: &'a mut CountryListState,
    countries: &'a [Country],
    has_more: bool,
}

impl<'a> CountryListView<'a> {
    pub fn new(state: &'a mut CountryListState, countries: &'a [Country], has_more: bool) -> Self {
        Self {
            state,
            countries,
            has_more,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut items: Vec<ListItem> = self.countries.iter().map(row).collect();
        if self.has_more {
            items.push(ListItem::new(Line::from(Span::styled(
                "  … scroll for more",
                Style::default().fg(Color::DarkGray),
            ))));
        }

        let list = List::new(items)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("› ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn row(country: &Country) -> ListItem<'_> {
    let line = Line::from(vec![
        Span::styled(
            pad(country.display_name(), NAME_WIDTH),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            pad(country.display_capital(), CAPITAL_WIDTH),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled(
            pad(country.display_region(), REGION_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(country.display_population(), Style::default().fg(Color::DarkGray)),
    ]);
    ListItem::new(line)
}

/// Truncates (with "…") or right-pads `s` to exactly `width` columns.
fn pad(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{s}{}", " ".repeat(width - s.width()));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_clamps_selection() {
        let mut state = CountryListState::new();
        state.sync(5);
        assert_eq!(state.selected(), Some(0));

        state.list_state.select(Some(4));
        state.sync(2);
        assert_eq!(state.selected(), Some(1));

        state.sync(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_navigation_emits_moves() {
        let mut state = CountryListState::new();
        state.sync(12);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), Some(ListEvent::Moved(1)));
        assert_eq!(state.handle_event(&TuiEvent::PageDown), Some(ListEvent::Moved(11)));
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), Some(ListEvent::Moved(11)));
        assert_eq!(state.handle_event(&TuiEvent::Home), Some(ListEvent::Moved(0)));
        assert_eq!(state.handle_event(&TuiEvent::CursorUp), Some(ListEvent::Moved(0)));
        assert_eq!(state.handle_event(&TuiEvent::End), Some(ListEvent::Moved(11)));
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(ListEvent::Open(11)));
    }

    #[test]
    fn test_empty_list_ignores_navigation() {
        let mut state = CountryListState::new();
        state.sync(0);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_reset_returns_to_top() {
        let mut state = CountryListState::new();
        state.sync(8);
        state.handle_event(&TuiEvent::End);
        state.reset();
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("Chad", 6), "Chad  ");
        assert_eq!(pad("Switzerland", 6), "Switz…");
        assert_eq!(pad("日本国", 4), "日… ");
    }
}
