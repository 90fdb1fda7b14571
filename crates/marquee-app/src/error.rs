//! Session error types.

use std::fmt;

use marquee_tmdb::TmdbError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Network call a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuration,
    NowPlaying,
}

impl Stage {
    /// User-facing message for a transport or HTTP failure.
    pub fn network_failure_message(&self) -> &'static str {
        match self {
            Stage::Configuration => "Failed getting configuration",
            Stage::NowPlaying => "Failed to get data from now_playing endpoint",
        }
    }

    /// User-facing message for a malformed response.
    pub fn parse_failure_message(&self) -> &'static str {
        match self {
            Stage::Configuration => "Failure parsing configuration",
            Stage::NowPlaying => "Failed to parse now playing movies",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Configuration => write!(f, "configuration"),
            Stage::NowPlaying => write!(f, "now_playing"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}: {}", .stage.network_failure_message(), .source)]
    Network {
        stage: Stage,
        #[source]
        source: TmdbError,
    },

    #[error("{}: {}", .stage.parse_failure_message(), .source)]
    Parse {
        stage: Stage,
        #[source]
        source: TmdbError,
    },
}

impl AppError {
    /// Classify a client error for the given stage.
    pub fn from_tmdb(stage: Stage, source: TmdbError) -> Self {
        if source.is_parse_failure() {
            Self::Parse { stage, source }
        } else {
            Self::Network { stage, source }
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            AppError::Network { stage, .. } | AppError::Parse { stage, .. } => *stage,
        }
    }

    /// Short message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Network { stage, .. } => stage.network_failure_message(),
            AppError::Parse { stage, .. } => stage.parse_failure_message(),
        }
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, AppError::Parse { .. })
    }

    pub fn is_network_failure(&self) -> bool {
        matches!(self, AppError::Network { .. })
    }
}
