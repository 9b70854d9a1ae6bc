//! # List State
//!
//! The country list session: the full dataset, the user's search and
//! region filter, the paginated visible window and the coarse `Phase`.
//!
//! ```text
//! CountryList
//! ├── repository: Arc<dyn CountryRepository>  // fetch-all source
//! ├── all_countries: Vec<Country>  // sorted by name, empty until first load
//! ├── filtered: Vec<Country>       // all_countries ∩ region ∩ search
//! ├── search_text: String          // case-insensitive, name or capital
//! ├── selected_region: RegionFilter
//! ├── visible_limit: usize         // visible = filtered[..visible_limit]
//! ├── page_size: usize             // window growth step, >= 1
//! ├── phase: Phase                 // Idle/Loading/Loaded/Empty/Failed
//! └── listeners: Vec<Listener>     // fired after each mutation
//! ```
//!
//! Phase transitions:
//!
//! ```text
//! Idle ──load──▶ Loading ──ok, non-empty──▶ Loaded
//!                   │    ──ok, empty──────▶ Empty("No countries available.")
//!                   └────err─────────────▶ Failed(message)
//! ```
//!
//! All mutation happens on one logical thread (the UI loop). A second load
//! while one is in flight is refused rather than queued.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::RegionFilter;
use crate::core::country::Country;
use crate::network::CountryRepository;

pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Distance from the end of the visible window that triggers the next page.
pub const LOAD_MORE_THRESHOLD: usize = 5;

pub const NO_COUNTRIES_MESSAGE: &str = "No countries available.";
pub const NO_MATCHES_MESSAGE: &str = "No results match your filters.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Empty(String),
    Failed(String),
}

/// Change callback. Receives the list after the mutation has been applied.
pub type Listener = Box<dyn Fn(&CountryList) + Send>;

pub struct CountryList {
    repository: Arc<dyn CountryRepository>,
    all_countries: Vec<Country>,
    filtered: Vec<Country>,
    search_text: String,
    selected_region: RegionFilter,
    visible_limit: usize,
    page_size: usize,
    phase: Phase,
    listeners: Vec<Listener>,
}

impl fmt::Debug for CountryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryList")
            .field("all_countries", &self.all_countries.len())
            .field("filtered", &self.filtered.len())
            .field("search_text", &self.search_text)
            .field("selected_region", &self.selected_region)
            .field("visible_limit", &self.visible_limit)
            .field("page_size", &self.page_size)
            .field("phase", &self.phase)
            .finish()
    }
}

impl CountryList {
    pub fn new(repository: Arc<dyn CountryRepository>, page_size: usize) -> Self {
        Self {
            repository,
            all_countries: Vec::new(),
            filtered: Vec::new(),
            search_text: String::new(),
            selected_region: RegionFilter::All,
            visible_limit: 0,
            page_size: page_size.max(1),
            phase: Phase::Idle,
            listeners: Vec::new(),
        }
    }

    pub fn repository(&self) -> Arc<dyn CountryRepository> {
        self.repository.clone()
    }

    pub fn all_countries(&self) -> &[Country] {
        &self.all_countries
    }

    pub fn filtered(&self) -> &[Country] {
        &self.filtered
    }

    /// The rendered prefix of `filtered`.
    pub fn visible(&self) -> &[Country] {
        &self.filtered[..self.visible_limit]
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_region(&self) -> RegionFilter {
        self.selected_region
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// True while more of `filtered` remains beyond the visible window.
    pub fn has_more(&self) -> bool {
        self.visible_limit < self.filtered.len()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(self);
        }
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Enters `Loading`. Returns false (and changes nothing) if a load is
    /// already in flight; the caller must not fetch in that case.
    pub fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            debug!("Load already in flight, ignoring");
            return false;
        }
        info!("Loading countries");
        self.phase = Phase::Loading;
        self.notify();
        true
    }

    /// Applies the outcome of a fetch started with [`begin_load`](Self::begin_load).
    ///
    /// On failure the previous dataset is kept; only the phase changes.
    pub fn finish_load<E: fmt::Display>(&mut self, result: Result<Vec<Country>, E>) {
        match result {
            Ok(mut countries) => {
                // stable: equal names keep fetch order
                countries.sort_by(|a, b| a.display_name().cmp(b.display_name()));
                info!("Loaded {} countries", countries.len());
                self.all_countries = countries;

                if self.all_countries.is_empty() {
                    self.filtered.clear();
                    self.visible_limit = 0;
                    self.phase = Phase::Empty(NO_COUNTRIES_MESSAGE.to_string());
                } else {
                    self.filtered = self.compute_filtered();
                    self.reset_pagination();
                    self.phase = if self.filtered.is_empty() {
                        Phase::Empty(NO_MATCHES_MESSAGE.to_string())
                    } else {
                        Phase::Loaded
                    };
                }
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Failed to load countries: {}", message);
                self.phase = Phase::Failed(message);
            }
        }
        self.notify();
    }

    /// Fetches through the repository unless a load is already in flight.
    pub async fn load_countries(&mut self) {
        if !self.begin_load() {
            return;
        }
        let repository = self.repository.clone();
        let result = repository.fetch_countries().await;
        self.finish_load(result);
    }

    pub async fn refresh(&mut self) {
        self.load_countries().await;
    }

    // ------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text;
        self.apply_filters();
    }

    pub fn set_region(&mut self, region: RegionFilter) {
        if region == self.selected_region {
            return;
        }
        self.selected_region = region;
        self.apply_filters();
    }

    fn matches_search(&self, country: &Country) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        country.display_name().to_lowercase().contains(&needle)
            || country.display_capital().to_lowercase().contains(&needle)
    }

    fn compute_filtered(&self) -> Vec<Country> {
        self.all_countries
            .iter()
            .filter(|c| self.selected_region.matches(c.region.as_deref()) && self.matches_search(c))
            .cloned()
            .collect()
    }

    /// Loaded or Empty, except that an in-flight load keeps `Loading`.
    fn phase_for_filtered(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading
        } else if self.filtered.is_empty() {
            Phase::Empty(NO_MATCHES_MESSAGE.to_string())
        } else {
            Phase::Loaded
        }
    }

    fn apply_filters(&mut self) {
        if self.all_countries.is_empty() {
            self.filtered.clear();
            self.visible_limit = 0;
            self.notify();
            return;
        }

        self.filtered = self.compute_filtered();
        self.reset_pagination();
        self.phase = self.phase_for_filtered();
        debug!(
            "Filters applied (region={:?}, search={:?}): {} of {} match",
            self.selected_region,
            self.search_text,
            self.filtered.len(),
            self.all_countries.len()
        );
        self.notify();
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    fn reset_pagination(&mut self) {
        self.visible_limit = self.page_size.min(self.filtered.len());
    }

    /// Grows the visible window when `current_id` is among its last
    /// [`LOAD_MORE_THRESHOLD`] items. Returns true if the window grew.
    pub fn load_more_if_needed(&mut self, current_id: &str) -> bool {
        if self.phase != Phase::Loaded {
            return false;
        }
        let visible = self.visible();
        let Some(index) = visible.iter().position(|c| c.id == current_id) else {
            return false;
        };
        let threshold = visible.len().saturating_sub(LOAD_MORE_THRESHOLD);

        if index >= threshold && self.has_more() {
            self.visible_limit = (self.visible_limit + self.page_size).min(self.filtered.len());
            debug!(
                "Visible window grew to {} of {}",
                self.visible_limit,
                self.filtered.len()
            );
            self.notify();
            return true;
        }
        false
    }
}
