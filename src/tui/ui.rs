use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::{CountryList, Phase};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryListView, DetailsOverlay, RegionBar, StatusView, TitleBar};

const HELP_TEXT: &str =
    " ↑↓ Move  Enter Details  Tab Region  Ctrl+R Refresh  Esc Clear/Quit  Ctrl+C Quit ";

pub fn draw_ui(frame: &mut Frame, list: &CountryList, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Length(1), Min(0), Length(1)]);
    let [title_area, search_area, region_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::from_list(list).render(frame, title_area);
    tui.search_bar.render(frame, search_area);
    RegionBar::new(list.selected_region()).render(frame, region_area);

    match main_view(list, spinner_frame) {
        Some(mut status) => status.render(frame, main_area),
        None => {
            CountryListView::new(&mut tui.country_list, list.visible(), list.has_more())
                .render(frame, main_area);
        }
    }

    frame.render_widget(
        Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(details) = &tui.details {
        let area = frame.area();
        DetailsOverlay::new(details).render(frame, area);
    }
}

/// What fills the main area. None means the list itself.
///
/// A refresh with data already on screen keeps showing the list; so does
/// a failed refresh, which is reported in the title bar instead.
fn main_view(list: &CountryList, spinner_frame: usize) -> Option<StatusView> {
    match list.phase() {
        Phase::Idle | Phase::Loading if list.visible().is_empty() => {
            Some(StatusView::Loading { spinner_frame })
        }
        Phase::Empty(message) => Some(StatusView::Empty(message.clone())),
        Phase::Failed(message) if list.visible().is_empty() => {
            Some(StatusView::Failed(message.clone()))
        }
        _ => None,
    }
}
