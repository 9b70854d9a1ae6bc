//! # Country
//!
//! The record decoded from the API. Immutable once built; every display
//! value is derived from the fields with a fixed fallback when the field
//! is missing.
//!
//! ```text
//! Country
//! ├── id: String                     // cca3 → cca2 → ccn3 → random uuid
//! ├── name: Name { common, official }
//! ├── capital / region / subregion
//! ├── population / area
//! ├── flags: Flags { png, svg }
//! ├── latlng: [lat, lng]
//! ├── languages: code → name
//! └── timezones / continents
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Name {
    pub common: String,
    pub official: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

/// Wire shape. Unknown keys are ignored, missing optional keys become None.
#[derive(Deserialize, Debug, Clone)]
struct CountryRecord {
    cca2: Option<String>,
    cca3: Option<String>,
    ccn3: Option<String>,
    name: Name,
    capital: Option<Vec<String>>,
    region: Option<String>,
    subregion: Option<String>,
    population: Option<u64>,
    area: Option<f64>,
    flags: Option<Flags>,
    latlng: Option<Vec<f64>>,
    languages: Option<BTreeMap<String, String>>,
    timezones: Option<Vec<String>>,
    continents: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "CountryRecord")]
pub struct Country {
    /// Resolved once at construction so it stays stable for this record.
    pub id: String,
    pub cca2: Option<String>,
    pub cca3: Option<String>,
    pub ccn3: Option<String>,
    pub name: Name,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub flags: Option<Flags>,
    pub latlng: Option<Vec<f64>>,
    pub languages: Option<BTreeMap<String, String>>,
    pub timezones: Option<Vec<String>>,
    pub continents: Option<Vec<String>>,
}

impl From<CountryRecord> for Country {
    fn from(r: CountryRecord) -> Self {
        let id = r
            .cca3
            .clone()
            .or_else(|| r.cca2.clone())
            .or_else(|| r.ccn3.clone())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Self {
            id,
            cca2: r.cca2,
            cca3: r.cca3,
            ccn3: r.ccn3,
            name: r.name,
            capital: r.capital,
            region: r.region,
            subregion: r.subregion,
            population: r.population,
            area: r.area,
            flags: r.flags,
            latlng: r.latlng,
            languages: r.languages,
            timezones: r.timezones,
            continents: r.continents,
        }
    }
}

impl Country {
    /// A country with only a common name. Handy for fixtures.
    pub fn named(common: impl Into<String>) -> Self {
        CountryRecord {
            cca2: None,
            cca3: None,
            ccn3: None,
            name: Name {
                common: common.into(),
                official: None,
            },
            capital: None,
            region: None,
            subregion: None,
            population: None,
            area: None,
            flags: None,
            latlng: None,
            languages: None,
            timezones: None,
            continents: None,
        }
        .into()
    }

    pub fn display_name(&self) -> &str {
        &self.name.common
    }

    pub fn display_capital(&self) -> &str {
        self.capital
            .as_ref()
            .and_then(|c| c.first())
            .map(String::as_str)
            .unwrap_or("No Capital")
    }

    pub fn display_region(&self) -> &str {
        self.region.as_deref().unwrap_or("Unknown Region")
    }

    pub fn display_population(&self) -> String {
        match self.population {
            Some(p) => group_thousands(&p.to_string()),
            None => "Population data unavailable".to_string(),
        }
    }

    pub fn display_area(&self) -> String {
        match self.area {
            Some(a) => format!("{} km²", format_decimal(a)),
            None => "Area data unavailable".to_string(),
        }
    }

    /// Raster preferred over vector.
    pub fn flag_url(&self) -> Option<&str> {
        let flags = self.flags.as_ref()?;
        flags.png.as_deref().or(flags.svg.as_deref())
    }
}

/// Inserts `,` every three digits from the right: "5465629" → "5,465,629".
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped integer part plus at most three fraction digits, trailing zeros dropped.
fn format_decimal(value: f64) -> String {
    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && formatted != "0.000" { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{}", group_thousands(int_part))
    } else {
        format!("{sign}{}.{frac}", group_thousands(int_part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORWAY_JSON: &str = r#"{
        "name": {"common": "Norway", "official": "Kingdom of Norway", "nativeName": {}},
        "cca3": "NOR",
        "capital": ["Oslo"],
        "region": "Europe",
        "population": 5379475,
        "area": 323802.0,
        "flags": {"png": "https://flagcdn.com/w320/no.png", "svg": "https://flagcdn.com/no.svg", "alt": "..."},
        "latlng": [62.0, 10.0],
        "languages": {"nno": "Norwegian Nynorsk", "nob": "Norwegian Bokmål", "smi": "Sami"},
        "timezones": ["UTC+01:00"]
    }"#;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let country: Country = serde_json::from_str(NORWAY_JSON).unwrap();
        assert_eq!(country.id, "NOR");
        assert_eq!(country.display_name(), "Norway");
        assert_eq!(country.name.official.as_deref(), Some("Kingdom of Norway"));
        assert_eq!(country.languages.as_ref().map(|l| l.len()), Some(3));
        assert!(country.subregion.is_none());
        assert!(country.continents.is_none());
    }

    #[test]
    fn test_decode_requires_common_name() {
        let result: Result<Country, _> = serde_json::from_str(r#"{"cca3": "XXX"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_negative_population() {
        let result: Result<Country, _> =
            serde_json::from_str(r#"{"name": {"common": "X"}, "population": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_identity_prefers_cca3_then_cca2_then_ccn3() {
        let c: Country =
            serde_json::from_str(r#"{"name": {"common": "A"}, "cca2": "AA", "ccn3": "001"}"#).unwrap();
        assert_eq!(c.id, "AA");

        let c: Country = serde_json::from_str(r#"{"name": {"common": "A"}, "ccn3": "001"}"#).unwrap();
        assert_eq!(c.id, "001");
    }

    #[test]
    fn test_fallback_identity_is_random_but_stable() {
        let a = Country::named("Nowhere");
        let b = Country::named("Nowhere");
        assert_ne!(a.id, b.id);
        assert_eq!(a.id, a.clone().id);
        assert_eq!(uuid::Uuid::parse_str(&a.id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_display_fallbacks() {
        let c = Country::named("Bare");
        assert_eq!(c.display_capital(), "No Capital");
        assert_eq!(c.display_region(), "Unknown Region");
        assert_eq!(c.display_population(), "Population data unavailable");
        assert_eq!(c.display_area(), "Area data unavailable");
        assert_eq!(c.flag_url(), None);
    }

    #[test]
    fn test_empty_capital_list_uses_sentinel() {
        let c: Country = serde_json::from_str(r#"{"name": {"common": "A"}, "capital": []}"#).unwrap();
        assert_eq!(c.display_capital(), "No Capital");
    }

    #[test]
    fn test_display_numbers() {
        let country: Country = serde_json::from_str(NORWAY_JSON).unwrap();
        assert_eq!(country.display_population(), "5,379,475");
        assert_eq!(country.display_area(), "323,802 km²");

        let c: Country =
            serde_json::from_str(r#"{"name": {"common": "A"}, "area": 0.44, "population": 0}"#).unwrap();
        assert_eq!(c.display_area(), "0.44 km²");
        assert_eq!(c.display_population(), "0");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }

    #[test]
    fn test_flag_prefers_png() {
        let country: Country = serde_json::from_str(NORWAY_JSON).unwrap();
        assert_eq!(country.flag_url(), Some("https://flagcdn.com/w320/no.png"));

        let c: Country = serde_json::from_str(
            r#"{"name": {"common": "A"}, "flags": {"svg": "https://flagcdn.com/a.svg"}}"#,
        )
        .unwrap();
        assert_eq!(c.flag_url(), Some("https://flagcdn.com/a.svg"));
    }
}
