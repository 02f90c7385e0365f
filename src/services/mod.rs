pub mod country_service;
pub mod error_handling;

pub use country_service::{CountryProvider, CountryService, RestCountriesClient};
pub use error_handling::{AcquisitionError, ConfigError};
