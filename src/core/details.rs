//! Detail-view formatter: plain display strings for a single country.

use super::country::Country;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetails {
    country: Country,
}

impl CountryDetails {
    pub fn new(country: Country) -> Self {
        Self { country }
    }

    pub fn id(&self) -> &str {
        &self.country.id
    }

    pub fn title(&self) -> &str {
        self.country.display_name()
    }

    /// "Capital · Region"
    pub fn subtitle(&self) -> String {
        format!(
            "{} · {}",
            self.country.display_capital(),
            self.country.display_region()
        )
    }

    pub fn flag_url(&self) -> Option<&str> {
        self.country.flag_url()
    }

    pub fn official_name(&self) -> &str {
        self.country
            .name
            .official
            .as_deref()
            .unwrap_or_else(|| self.country.display_name())
    }

    pub fn population_text(&self) -> String {
        self.country.display_population()
    }

    pub fn area_text(&self) -> String {
        self.country.display_area()
    }

    pub fn region(&self) -> &str {
        self.country.display_region()
    }

    pub fn subregion(&self) -> &str {
        self.country
            .subregion
            .as_deref()
            .unwrap_or("Subregion unavailable")
    }

    pub fn coordinates(&self) -> String {
        match self.country.latlng.as_deref() {
            Some([lat, lng]) => format!("{lat:.2}°, {lng:.2}°"),
            _ => "Coordinates unavailable".to_string(),
        }
    }

    /// Language names sorted alphabetically.
    pub fn languages(&self) -> String {
        match &self.country.languages {
            Some(languages) => {
                let mut names: Vec<&str> = languages.values().map(String::as_str).collect();
                names.sort_unstable();
                names.join(", ")
            }
            None => "Languages unavailable".to_string(),
        }
    }

    pub fn timezones(&self) -> String {
        join_or(self.country.timezones.as_deref(), "Timezones unavailable")
    }

    pub fn continents(&self) -> String {
        join_or(self.country.continents.as_deref(), "Continents unavailable")
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Official name", self.official_name().to_string()),
            ("Population", self.population_text()),
            ("Area", self.area_text()),
            ("Region", self.region().to_string()),
            ("Subregion", self.subregion().to_string()),
            ("Coordinates", self.coordinates()),
            ("Languages", self.languages()),
            ("Timezones", self.timezones()),
            ("Continents", self.continents()),
            ("Flag", self.flag_url().unwrap_or("Flag unavailable").to_string()),
        ]
    }
}

fn join_or(values: Option<&[String]>, fallback: &str) -> String {
    match values {
        Some(values) => values.join(", "),
        None => fallback.to_string(),
    }
}
