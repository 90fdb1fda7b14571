//! TMDB REST API client.

use std::fmt;
use std::time::{Duration, Instant};

use marquee_models::{ImageConfig, MovieSummary};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{TmdbError, TmdbResult};
use crate::metrics::{record_request, TRANSPORT_ERROR_STATUS};
use crate::types::{ConfigurationResponse, NowPlayingResponse};

/// Public TMDB v3 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

const API_KEY_PARAM: &str = "api_key";

// =============================================================================
// Configuration
// =============================================================================

/// TMDB client configuration.
#[derive(Clone)]
pub struct TmdbConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// v3 API key sent as the `api_key` query parameter
    pub api_key: String,
    /// Whole-request timeout; `None` waits for the server indefinitely
    pub timeout: Option<Duration>,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Create config from environment variables.
    pub fn from_env() -> TmdbResult<Self> {
        let api_key = std::env::var("TMDB_API_KEY")
            .map_err(|_| TmdbError::config("TMDB_API_KEY must be set"))?;

        let base_url =
            std::env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("TMDB_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        let connect_timeout_secs: u64 = std::env::var("TMDB_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let config = Self {
            timeout,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            ..Self::new(api_key)
        }
        .with_base_url(base_url);

        config.validate()?;
        Ok(config)
    }

    /// Check that the key is present, the timeouts are non-zero and the base
    /// URL is usable.
    pub fn validate(&self) -> TmdbResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(TmdbError::config("TMDB_API_KEY cannot be empty"));
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(TmdbError::config("TMDB_TIMEOUT_SECS must be greater than 0"));
        }
        if self.connect_timeout.is_zero() {
            return Err(TmdbError::config(
                "TMDB_CONNECT_TIMEOUT_SECS must be greater than 0",
            ));
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| TmdbError::config(format!("Invalid TMDB base URL '{}': {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TmdbError::config(format!(
                "TMDB base URL must be http(s), got '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Client
// =============================================================================

/// Error payload returned by TMDB on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    status_message: String,
}

/// Client for the TMDB endpoints used by the now-playing screen.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> TmdbResult<Self> {
        config.validate()?;

        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("marquee-tmdb/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TmdbError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> TmdbResult<Self> {
        Self::new(TmdbConfig::from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Fetch the image configuration.
    ///
    /// GET /configuration
    pub async fn get_configuration(&self) -> TmdbResult<ImageConfig> {
        let response: ConfigurationResponse =
            self.get_json("configuration", "/configuration").await?;
        Ok(ImageConfig::try_from(response)?)
    }

    /// Fetch the now-playing list as raw entries, in response order.
    ///
    /// GET /movie/now_playing
    pub async fn get_now_playing(&self) -> TmdbResult<Vec<serde_json::Value>> {
        let response: NowPlayingResponse =
            self.get_json("now_playing", "/movie/now_playing").await?;
        debug!(
            count = response.results.len(),
            page = ?response.page,
            total_results = ?response.total_results,
            "Received now playing page"
        );
        Ok(response.results)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, path: &str) -> TmdbResult<T> {
        let url = self.url(path);
        let start = Instant::now();

        debug!(endpoint = %endpoint, "Sending TMDB request to {}", url);

        // Transport errors must not carry the URL: it contains the API key.
        let response = match self
            .http
            .get(&url)
            .query(&[(API_KEY_PARAM, self.config.api_key.as_str())])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                record_request(endpoint, TRANSPORT_ERROR_STATUS, elapsed_ms(start));
                return Err(TmdbError::Network(e.without_url()));
            }
        };

        let status = response.status();
        record_request(endpoint, status.as_u16(), elapsed_ms(start));

        let body = response
            .text()
            .await
            .map_err(|e| TmdbError::Network(e.without_url()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.status_message)
                .unwrap_or(body);
            warn!(endpoint = %endpoint, status = status.as_u16(), "TMDB request failed: {}", message);
            return Err(TmdbError::api(status.as_u16(), message));
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(TmdbError::from_path_error)
    }
}

/// Convert the now-playing entry at `index` into a movie summary.
///
/// Parse errors report their path from the response root, e.g.
/// `results[2].title`.
pub fn parse_movie(index: usize, value: serde_json::Value) -> TmdbResult<MovieSummary> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let inner = e.path().to_string();
        let path = if inner == "." {
            format!("results[{}]", index)
        } else {
            format!("results[{}].{}", index, inner)
        };
        TmdbError::Parse {
            path,
            source: e.into_inner(),
        }
    })
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
