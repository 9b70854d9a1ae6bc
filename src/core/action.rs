//! # Actions
//!
//! Everything that can happen to the country list becomes an `Action`.
//! User types in the search box? That's `Action::SetSearchText(text)`.
//! The fetch comes back? That's `Action::CountriesLoaded(result)`.
//!
//! `update()` applies an action to the `CountryList` and returns an
//! `Effect` telling the event loop what I/O to start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::RegionFilter;
use crate::core::country::Country;
use crate::core::state::CountryList;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadCountries,
    Refresh,
    /// Outcome of a fetch, with the error already rendered for the user.
    CountriesLoaded(Result<Vec<Country>, String>),
    SetSearchText(String),
    SetRegion(RegionFilter),
    /// A row with this id was shown (infinite-scroll trigger).
    ItemShown(String),
    Quit,
}

/// Side effects the event loop must perform after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchCountries,
    Quit,
}

pub fn update(list: &mut CountryList, action: Action) -> Effect {
    debug!("update: {:?}", ActionLabel(&action));
    match action {
        Action::LoadCountries | Action::Refresh => {
            if list.begin_load() {
                Effect::FetchCountries
            } else {
                Effect::None
            }
        }
        Action::CountriesLoaded(result) => {
            list.finish_load(result);
            Effect::None
        }
        Action::SetSearchText(text) => {
            list.set_search_text(text);
            Effect::None
        }
        Action::SetRegion(region) => {
            list.set_region(region);
            Effect::None
        }
        Action::ItemShown(id) => {
            list.load_more_if_needed(&id);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

/// Keeps loaded payloads out of the log.
struct ActionLabel<'a>(&'a Action);

impl std::fmt::Debug for ActionLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::CountriesLoaded(Ok(countries)) => {
                write!(f, "CountriesLoaded(Ok({} countries))", countries.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;
    use crate::test_support::{large_country_list, sample_countries, test_list};

    #[test]
    fn test_second_load_while_in_flight_is_refused() {
        let mut list = test_list(sample_countries(), 5);
        assert_eq!(update(&mut list, Action::LoadCountries), Effect::FetchCountries);
        assert_eq!(update(&mut list, Action::LoadCountries), Effect::None);
        assert_eq!(update(&mut list, Action::Refresh), Effect::None);
        assert_eq!(list.phase(), &Phase::Loading);
    }

    #[test]
    fn test_loaded_result_completes_load() {
        let mut list = test_list(vec![], 5);
        update(&mut list, Action::LoadCountries);
        let effect = update(&mut list, Action::CountriesLoaded(Ok(sample_countries())));
        assert_eq!(effect, Effect::None);
        assert_eq!(list.phase(), &Phase::Loaded);
        assert_eq!(list.visible().len(), 3);

        // refresh is allowed again once the first load resolved
        assert_eq!(update(&mut list, Action::Refresh), Effect::FetchCountries);
    }

    #[test]
    fn test_failed_result() {
        let mut list = test_list(vec![], 5);
        update(&mut list, Action::LoadCountries);
        update(
            &mut list,
            Action::CountriesLoaded(Err("sample error".to_string())),
        );
        assert_eq!(list.phase(), &Phase::Failed("sample error".to_string()));
    }

    #[test]
    fn test_filter_and_scroll_actions() {
        let mut list = test_list(vec![], 3);
        update(&mut list, Action::LoadCountries);
        update(&mut list, Action::CountriesLoaded(Ok(large_country_list())));

        update(&mut list, Action::SetRegion(RegionFilter::Asia));
        assert_eq!(list.filtered().len(), 5);

        let last = list.visible().last().unwrap().id.clone();
        update(&mut list, Action::ItemShown(last));
        assert_eq!(list.visible().len(), 5);

        update(&mut list, Action::SetSearchText("capital 3".to_string()));
        assert_eq!(list.visible().len(), 1);
    }

    #[test]
    fn test_quit() {
        let mut list = test_list(vec![], 5);
        assert_eq!(update(&mut list, Action::Quit), Effect::Quit);
    }
}
