//! TMDB error types.

use marquee_models::ModelError;
use thiserror::Error;

/// Result type for TMDB operations.
pub type TmdbResult<T> = Result<T, TmdbError>;

/// Errors that can occur while talking to TMDB.
#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response at '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid image configuration: {0}")]
    InvalidConfiguration(#[from] ModelError),
}

impl TmdbError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Parse {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }

    /// True for malformed payloads and configurations that cannot be used.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            TmdbError::Parse { .. } | TmdbError::InvalidConfiguration(_)
        )
    }

    /// True for transport errors and non-success HTTP statuses.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, TmdbError::Network(_) | TmdbError::Api { .. })
    }

    /// HTTP status code, if the server answered.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            TmdbError::Api { status, .. } => Some(*status),
            TmdbError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
