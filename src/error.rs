//! Error taxonomy shared across all layers

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The API credential is missing or empty. Fatal to any request and
    /// raised synchronously, before any network access is attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The generative service call failed: transport error, non-2xx status,
    /// or a response body that does not satisfy the requested schema.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Document export failed while rasterizing or encoding pages.
    #[error("export error: {0}")]
    Export(String),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Upstream(_))
    }

    pub fn is_export(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream(format!("API request failed: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Upstream(format!("Failed to parse response JSON: {}", err))
    }
}
