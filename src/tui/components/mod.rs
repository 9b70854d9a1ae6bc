//! # TUI Components
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and list status
//! - `RegionBar`: region tabs
//! - `StatusView`: loading / empty / error message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBar`: search input, emits the new text on every edit
//! - `CountryListState` / `CountryListView`: selectable list of the visible window
//!
//! `DetailsOverlay` is a transient wrapper over a `CountryDetails` held in
//! `TuiState`.

pub mod country_list;
pub mod details_overlay;
pub mod region_bar;
pub mod search_bar;
pub mod status_view;
pub mod title_bar;

pub use country_list::{CountryListState, CountryListView, ListEvent};
pub use details_overlay::DetailsOverlay;
pub use region_bar::RegionBar;
pub use search_bar::{SearchBar, SearchEvent};
pub use status_view::StatusView;
pub use title_bar::TitleBar;
