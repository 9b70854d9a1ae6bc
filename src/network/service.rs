//! # Country Repository
//!
//! Builds the fetch-all request and hands it to the transport. Holds no
//! state beyond its configuration. Errors pass through unchanged.

use std::time::Duration;

use async_trait::async_trait;
use log::info;

use super::target::{CountryTarget, DEFAULT_BASE_URL};
use super::transport::{HttpExecutor, MAX_TIMEOUT, NetworkError};
use crate::core::country::Country;

#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Fetches the complete dataset in one call.
    async fn fetch_countries(&self) -> Result<Vec<Country>, NetworkError>;
}

/// Repository backed by the REST Countries HTTP API.
pub struct CountriesService {
    executor: HttpExecutor,
    base_url: String,
    timeout: Duration,
}

impl CountriesService {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            executor: HttpExecutor::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: MAX_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_executor(mut self, executor: HttpExecutor) -> Self {
        self.executor = executor;
        self
    }
}

#[async_trait]
impl CountryRepository for CountriesService {
    async fn fetch_countries(&self) -> Result<Vec<Country>, NetworkError> {
        let request = CountryTarget::all_countries().make_request(&self.base_url, self.timeout)?;
        let countries: Vec<Country> = self.executor.execute(&request).await?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }
}
