//! # TitleBar Component
//!
//! Top line: app name plus a short summary of the list phase
//! ("Showing 24 of 250", "Loading…", "3 matches").

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::{CountryList, Phase};
use crate::tui::component::Component;

pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    /// Derives the status text from the list.
    pub fn from_list(list: &CountryList) -> Self {
        Self::new(status_text(list))
    }
}

pub fn status_text(list: &CountryList) -> String {
    match list.phase() {
        Phase::Idle => String::new(),
        Phase::Loading if list.all_countries().is_empty() => "Loading…".to_string(),
        Phase::Loading => "Refreshing…".to_string(),
        Phase::Loaded => format!(
            "Showing {} of {}",
            list.visible().len(),
            list.filtered().len()
        ),
        Phase::Empty(_) => "No results".to_string(),
        Phase::Failed(_) => "Load failed".to_string(),
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Countries",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{large_country_list, loaded_list, test_list};

    #[test]
    fn test_idle_has_no_status() {
        let list = test_list(vec![], 5);
        assert_eq!(status_text(&list), "");
    }

    #[tokio::test]
    async fn test_loaded_status_counts_window() {
        let list = loaded_list(large_country_list(), 3).await;
        assert_eq!(status_text(&list), "Showing 3 of 10");
    }

    #[tokio::test]
    async fn test_refresh_status() {
        let mut list = test_list(large_country_list(), 3);
        list.begin_load();
        assert_eq!(status_text(&list), "Loading…");

        let mut list = loaded_list(large_country_list(), 3).await;
        list.begin_load();
        assert_eq!(status_text(&list), "Refreshing…");
    }
}
