use thiserror::Error;

/// Failure to obtain the country dataset from the remote provider.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("Request to country provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Country provider returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Country provider response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Invalid values in the application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid country provider URL {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },

    #[error("Invalid request timeout {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },
}
