use crate::services::error_handling::ConfigError;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all";
pub const DEFAULT_WINDOW_TITLE: &str = "Countries";

pub const API_URL_VAR: &str = "COUNTRIES_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "COUNTRIES_REQUEST_TIMEOUT_SECS";
pub const WINDOW_TITLE_VAR: &str = "COUNTRIES_WINDOW_TITLE";

// DEFAULT_API_URL is a literal; parsing it cannot fail.
static DEFAULT_API: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_API_URL).expect("default API URL is valid"));

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Country provider endpoint; the field selection is appended as the query.
    pub api_url: Url,

    /// Applied to the HTTP client. No timeout when unset.
    pub request_timeout: Option<Duration>,

    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API.clone(),
            request_timeout: None,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. Unset or blank
    /// variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = var(API_URL_VAR) {
            config.api_url = Url::parse(value.trim())
                .map_err(|source| ConfigError::InvalidEndpoint { value, source })?;
        }

        if let Some(value) = var(REQUEST_TIMEOUT_VAR) {
            config.request_timeout = Some(parse_timeout(&value)?);
        }

        if let Some(value) = var(WINDOW_TITLE_VAR) {
            config.window_title = value;
        }

        Ok(config)
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.window_title, "Countries");
    }

    #[test]
    fn test_default_api_url_parses() {
        assert_eq!(DEFAULT_API.scheme(), "https");
        assert_eq!(DEFAULT_API.host_str(), Some("restcountries.com"));
        assert_eq!(DEFAULT_API.path(), "/v3.1/all");
    }

    #[test]
    fn test_overrides_from_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            (API_URL_VAR, "http://127.0.0.1:9000/v3.1/all"),
            (REQUEST_TIMEOUT_VAR, " 15 "),
            (WINDOW_TITLE_VAR, "World"),
        ]))
        .unwrap();

        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:9000/v3.1/all");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.window_title, "World");
    }

    #[test]
    fn test_blank_variables_use_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(API_URL_VAR, "  "), (REQUEST_TIMEOUT_VAR, "")])).unwrap();
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = AppConfig::from_lookup(lookup(&[(API_URL_VAR, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["0", "-3", "soon"] {
            let err = AppConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, value)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout { .. }), "{value}");
        }
    }
}
