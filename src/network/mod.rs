pub mod service;
pub mod target;
pub mod transport;

pub use service::{CountriesService, CountryRepository};
pub use target::{CountryTarget, Field};
pub use transport::{HttpExecutor, NetworkError, Request};
