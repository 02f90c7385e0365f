use crate::config::AppConfig;
use crate::domain::country::Country;
use crate::services::error_handling::AcquisitionError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Fields requested from the provider; everything else is left out of the response.
pub const COUNTRY_FIELDS: [&str; 3] = ["name", "flags", "continents"];

/// Source of the full country dataset.
#[async_trait]
pub trait CountryProvider: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Country>, AcquisitionError>;
}

/// HTTP client for the restcountries API.
#[derive(Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    url: Url,
}

impl RestCountriesClient {
    pub fn new(config: &AppConfig) -> Result<Self, AcquisitionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: request_url(&config.api_url),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn request_url(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    // Commas stay literal; set_query does not form-encode.
    url.set_query(Some(&format!("fields={}", COUNTRY_FIELDS.join(","))));
    url
}

#[async_trait]
impl CountryProvider for RestCountriesClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_all(&self) -> Result<Vec<Country>, AcquisitionError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AcquisitionError::Status {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let countries: Vec<Country> = serde_json::from_slice(&body)?;
        debug!(count = countries.len(), bytes = body.len(), "Decoded country list");
        Ok(countries)
    }
}

/// Performs the one-time acquisition of the country dataset.
///
/// The provider is asked at most once per service. A failed fetch is logged
/// and leaves the dataset empty for the rest of the session.
pub struct CountryService {
    provider: Arc<dyn CountryProvider>,
    dataset: OnceCell<Vec<Country>>,
}

impl CountryService {
    pub fn new(provider: Arc<dyn CountryProvider>) -> Self {
        Self {
            provider,
            dataset: OnceCell::new(),
        }
    }

    pub async fn initialize(&self) -> Vec<Country> {
        self.dataset
            .get_or_init(|| async {
                match self.provider.fetch_all().await {
                    Ok(countries) => {
                        info!(count = countries.len(), "Loaded countries");
                        countries
                    }
                    Err(e) => {
                        error!(error = %e, "Error fetching countries");
                        Vec::new()
                    }
                }
            })
            .await
            .clone()
    }

    /// `None` until [`initialize`](Self::initialize) has completed.
    pub fn dataset(&self) -> Option<&[Country]> {
        self.dataset.get().map(Vec::as_slice)
    }

    pub fn is_initialized(&self) -> bool {
        self.dataset.initialized()
    }
}
