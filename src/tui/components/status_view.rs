//! Full-area message shown instead of the list: loading spinner, empty
//! result, or a failed load with a retry hint.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    Loading { spinner_frame: usize },
    Empty(String),
    Failed(String),
}

impl StatusView {
    fn lines(&self) -> (Vec<Line<'_>>, Style, &'static str) {
        match self {
            StatusView::Loading { spinner_frame } => (
                vec![Line::from(format!(
                    "{} Loading countries…",
                    SPINNER[spinner_frame % SPINNER.len()]
                ))],
                Style::default().fg(Color::Cyan),
                "",
            ),
            StatusView::Empty(message) => (
                vec![
                    Line::from(message.as_str()),
                    Line::from(""),
                    Line::from("Try another search or region.").style(Style::default().fg(Color::DarkGray)),
                ],
                Style::default().fg(Color::Gray),
                "",
            ),
            StatusView::Failed(message) => (
                vec![
                    Line::from(message.as_str()),
                    Line::from(""),
                    Line::from("Press Ctrl+R to retry").style(Style::default().fg(Color::DarkGray)),
                ],
                Style::default().fg(Color::Red),
                " ERROR ",
            ),
        }
    }
}

impl Component for StatusView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (lines, style, title) = self.lines();

        // vertically centre the text inside the bordered block
        let top_padding = (area.height.saturating_sub(2) as usize).saturating_sub(lines.len()) / 2;
        let mut content = vec![Line::from(""); top_padding];
        content.extend(lines);

        let paragraph = Paragraph::new(content)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(title).border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(paragraph, area);
    }
}
