//! Region tabs. Stateless: the selected region comes from the core list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::RegionFilter;
use crate::tui::component::Component;

pub struct RegionBar {
    pub selected: RegionFilter,
}

impl RegionBar {
    pub fn new(selected: RegionFilter) -> Self {
        Self { selected }
    }

    fn selected_index(&self) -> usize {
        RegionFilter::ALL
            .iter()
            .position(|r| *r == self.selected)
            .unwrap_or(0)
    }
}

impl Component for RegionBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = RegionFilter::ALL.iter().map(|r| r.label());
        let tabs = Tabs::new(titles)
            .select(self.selected_index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");
        frame.render_widget(tabs, area);
    }
}
