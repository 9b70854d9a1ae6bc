//! Request builder for the countries API.
//!
//! Only one endpoint is supported: fetch-all with a field projection.
//! Without the `fields` query the server returns full records, which are
//! several times larger.

use std::time::Duration;

use reqwest::Url;

use super::transport::{NetworkError, Request};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Attributes the server includes per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Capital,
    Region,
    Population,
    Area,
    Flags,
    Latlng,
    Languages,
    Timezones,
    Cca3,
}

impl Field {
    /// The projection used by the list screen.
    pub const DEFAULT: [Field; 10] = [
        Field::Name,
        Field::Capital,
        Field::Region,
        Field::Population,
        Field::Area,
        Field::Flags,
        Field::Latlng,
        Field::Languages,
        Field::Timezones,
        Field::Cca3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Capital => "capital",
            Field::Region => "region",
            Field::Population => "population",
            Field::Area => "area",
            Field::Flags => "flags",
            Field::Latlng => "latlng",
            Field::Languages => "languages",
            Field::Timezones => "timezones",
            Field::Cca3 => "cca3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryTarget {
    AllCountries { fields: Vec<Field> },
}

impl CountryTarget {
    pub fn all_countries() -> Self {
        CountryTarget::AllCountries {
            fields: Field::DEFAULT.to_vec(),
        }
    }

    fn path(&self) -> &'static str {
        match self {
            CountryTarget::AllCountries { .. } => "/v3.1/all",
        }
    }

    /// Query string, or None when there is nothing to project.
    fn query(&self) -> Option<String> {
        match self {
            CountryTarget::AllCountries { fields } if fields.is_empty() => None,
            CountryTarget::AllCountries { fields } => {
                let joined = fields
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                Some(format!("fields={joined}"))
            }
        }
    }

    /// Builds the GET request against `base_url`.
    pub fn make_request(&self, base_url: &str, timeout: Duration) -> Result<Request, NetworkError> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path());
        let mut url = Url::parse(&raw).map_err(|e| NetworkError::InvalidUrl(format!("{raw}: {e}")))?;

        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(NetworkError::InvalidUrl(raw));
        }

        // set_query keeps the commas literal; query_pairs_mut would encode them
        url.set_query(self.query().as_deref());

        Ok(Request::get(url, timeout))
    }
}
