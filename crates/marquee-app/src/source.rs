//! Source of configuration and movie data.

use async_trait::async_trait;
use marquee_models::ImageConfig;
use marquee_tmdb::{TmdbClient, TmdbResult};

/// The two network calls a session makes.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Image configuration for the session.
    async fn configuration(&self) -> TmdbResult<ImageConfig>;

    /// Raw now-playing entries, in response order.
    async fn now_playing(&self) -> TmdbResult<Vec<serde_json::Value>>;
}

#[async_trait]
impl MovieSource for TmdbClient {
    async fn configuration(&self) -> TmdbResult<ImageConfig> {
        self.get_configuration().await
    }

    async fn now_playing(&self) -> TmdbResult<Vec<serde_json::Value>> {
        self.get_now_playing().await
    }
}
