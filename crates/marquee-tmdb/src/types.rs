//! TMDB request/response types.

use marquee_models::{ImageConfig, ModelResult};
use serde::{Deserialize, Serialize};

/// Response of `GET /configuration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationResponse {
    pub images: ImagesConfiguration,
}

/// Image section of the configuration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfiguration {
    /// HTTPS image base URL
    #[serde(default)]
    pub secure_base_url: Option<String>,
    /// Plain HTTP image base URL
    #[serde(default)]
    pub base_url: Option<String>,
    pub poster_sizes: Vec<String>,
    pub backdrop_sizes: Vec<String>,
}

impl ImagesConfiguration {
    /// Preferred base URL: `secure_base_url`, falling back to `base_url`.
    pub fn preferred_base_url(&self) -> Option<&str> {
        self.secure_base_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.base_url.as_deref())
    }
}

impl TryFrom<ConfigurationResponse> for ImageConfig {
    type Error = marquee_models::ModelError;

    fn try_from(response: ConfigurationResponse) -> ModelResult<Self> {
        let images = response.images;
        let base_url = images.preferred_base_url().unwrap_or_default().to_string();
        ImageConfig::new(base_url, images.poster_sizes, images.backdrop_sizes)
    }
}

/// Response of `GET /movie/now_playing`.
///
/// Entries are kept as raw JSON so they can be converted one at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NowPlayingResponse {
    #[serde(default)]
    pub page: Option<i64>,
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub total_results: Option<i64>,
}
