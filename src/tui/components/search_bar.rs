//! # SearchBar Component
//!
//! Single-line search input. Typing edits the text and emits the new
//! value so the list can refilter on every keystroke.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
}

#[derive(Debug, Default)]
pub struct SearchBar {
    text: String,
}

impl SearchBar {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Empties the input. Returns the event only if there was something to clear.
    pub fn clear(&mut self) -> Option<SearchEvent> {
        if self.text.is_empty() {
            return None;
        }
        self.text.clear();
        Some(SearchEvent::Changed(String::new()))
    }

    /// The tail of the text that fits in `width` columns.
    fn visible_tail(&self, width: usize) -> &str {
        let mut start = 0;
        while self.text[start..].width() > width {
            start += self.text[start..].chars().next().map_or(1, char::len_utf8);
        }
        &self.text[start..]
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.text.push(*c);
                Some(SearchEvent::Changed(self.text.clone()))
            }
            TuiEvent::Paste(data) => {
                // search is single-line
                let line: String = data.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.text.push_str(&line);
                Some(SearchEvent::Changed(self.text.clone()))
            }
            TuiEvent::Backspace => self
                .text
                .pop()
                .map(|_| SearchEvent::Changed(self.text.clone())),
            _ => None,
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(3) as usize; // borders + cursor cell
        let block = Block::bordered()
            .title(" Search name or capital ")
            .border_style(Style::default().fg(Color::DarkGray));

        let (content, style) = if self.text.is_empty() {
            ("Type to search…", Style::default().fg(Color::DarkGray))
        } else {
            (self.visible_tail(inner_width), Style::default())
        };
        frame.render_widget(Paragraph::new(content).style(style).block(block), area);

        let typed_width = if self.text.is_empty() {
            0
        } else {
            self.visible_tail(inner_width).width() as u16
        };
        frame.set_cursor_position((area.x + 1 + typed_width, area.y + 1));
    }
}
