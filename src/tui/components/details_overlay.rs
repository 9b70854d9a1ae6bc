//! # Details Overlay
//!
//! Centered popup with every field of one country. Opened with Enter on a
//! list row, dismissed with Esc. The flag is shown as its URL; images are
//! left to richer front ends.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::details::CountryDetails;

const LABEL_WIDTH: usize = 14;

pub struct DetailsOverlay<'a> {
    details: &'a CountryDetails,
}

impl<'a> DetailsOverlay<'a> {
    pub fn new(details: &'a CountryDetails) -> Self {
        Self { details }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.details.title()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(Span::styled(
                self.details.subtitle(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
        ];
        lines.extend(self.details.rows().into_iter().map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<LABEL_WIDTH$}"),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ])
        }));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
