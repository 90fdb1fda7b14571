//! Configuration resolution.

use marquee_models::ImageConfig;
use tracing::info;

use crate::error::{AppError, AppResult, Stage};
use crate::source::MovieSource;

/// Fetch the session's image configuration.
pub async fn resolve_configuration<S>(source: &S) -> AppResult<ImageConfig>
where
    S: MovieSource + ?Sized,
{
    let config = source
        .configuration()
        .await
        .map_err(|e| AppError::from_tmdb(Stage::Configuration, e))?;

    info!(
        base_url = %config.base_url(),
        poster_size = %config.poster_size(),
        backdrop_size = %config.backdrop_size(),
        "Loaded configuration"
    );

    Ok(config)
}
