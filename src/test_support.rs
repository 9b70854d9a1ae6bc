//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use crate::core::country::Country;
use crate::core::state::CountryList;
use crate::network::{CountryRepository, NetworkError};

/// A repository that returns a canned result and counts calls.
pub struct MockRepository {
    result: Result<Vec<Country>, NetworkError>,
    calls: AtomicUsize,
}

impl MockRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            result: Ok(countries),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: NetworkError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryRepository for MockRepository {
    async fn fetch_countries(&self) -> Result<Vec<Country>, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn country(value: serde_json::Value) -> Country {
    serde_json::from_value(value).expect("fixture should decode")
}

/// Norway, Kenya, Australia (deliberately unsorted).
pub fn sample_countries() -> Vec<Country> {
    vec![
        country(json!({
            "cca2": "NO", "cca3": "NOR", "ccn3": "578",
            "name": {"common": "Norway", "official": "Kingdom of Norway"},
            "capital": ["Oslo"],
            "region": "Europe", "subregion": "Northern Europe",
            "population": 5465629, "area": 323802.0,
            "flags": {"png": "https://flagcdn.com/w320/no.png"},
            "latlng": [62.0, 10.0],
            "languages": {"nor": "Norwegian"},
            "timezones": ["UTC+01:00"],
            "continents": ["Europe"]
        })),
        country(json!({
            "cca2": "KE", "cca3": "KEN", "ccn3": "404",
            "name": {"common": "Kenya", "official": "Republic of Kenya"},
            "capital": ["Nairobi"],
            "region": "Africa", "subregion": "Eastern Africa",
            "population": 53771300, "area": 580367.0,
            "flags": {"png": "https://flagcdn.com/w320/ke.png"},
            "latlng": [-1.0, 38.0],
            "languages": {"swa": "Swahili", "eng": "English"},
            "timezones": ["UTC+03:00"],
            "continents": ["Africa"]
        })),
        country(json!({
            "cca2": "AU", "cca3": "AUS", "ccn3": "036",
            "name": {"common": "Australia", "official": "Commonwealth of Australia"},
            "capital": ["Canberra"],
            "region": "Oceania", "subregion": "Australia and New Zealand",
            "population": 25687041, "area": 7692024.0,
            "flags": {"png": "https://flagcdn.com/w320/au.png"},
            "latlng": [-27.0, 133.0],
            "languages": {"eng": "English"},
            "timezones": ["UTC+08:00"],
            "continents": ["Oceania"]
        })),
    ]
}

/// "Country 1" ..= "Country 10"; even entries are in Europe, odd in Asia.
pub fn large_country_list() -> Vec<Country> {
    (1..=10)
        .map(|i| {
            country(json!({
                "cca2": format!("C{i}"),
                "cca3": format!("CT{i}"),
                "ccn3": format!("{i}"),
                "name": {"common": format!("Country {i}"), "official": format!("Country {i} Official")},
                "capital": [format!("Capital {i}")],
                "region": if i % 2 == 0 { "Europe" } else { "Asia" },
                "population": 1000 * i,
                "area": 100.0 * i as f64,
                "flags": {}
            }))
        })
        .collect()
}

/// A list over a mock repository that will return `countries`.
pub fn test_list(countries: Vec<Country>, page_size: usize) -> CountryList {
    CountryList::new(Arc::new(MockRepository::new(countries)), page_size)
}

/// Same as [`test_list`] but already loaded.
pub async fn loaded_list(countries: Vec<Country>, page_size: usize) -> CountryList {
    let mut list = test_list(countries, page_size);
    list.load_countries().await;
    list
}
