//! Now-playing list fetching.

use marquee_models::{ImageConfig, MovieList, Orientation};
use marquee_tmdb::parse_movie;
use tracing::info;

use crate::adapter::{bind_rows, RowView};
use crate::error::{AppError, AppResult, Stage};
use crate::source::MovieSource;
use crate::surface::DisplaySurface;

/// The movie list of a session together with the configuration its rows
/// are bound with.
///
/// Only constructible from an [`ImageConfig`], so the list cannot be
/// fetched before the configuration resolved.
#[derive(Debug, Clone)]
pub struct MovieFeed {
    config: ImageConfig,
    movies: MovieList,
}

impl MovieFeed {
    pub fn new(config: ImageConfig) -> Self {
        Self {
            config,
            movies: MovieList::new(),
        }
    }

    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    pub fn movies(&self) -> &MovieList {
        &self.movies
    }

    /// Fetch the now-playing list and append it entry by entry.
    ///
    /// The surface is told about each insertion as it happens. If an entry
    /// fails to parse, the entries before it stay in the list.
    pub async fn fetch_now_playing<S, D>(&mut self, source: &S, surface: &mut D) -> AppResult<usize>
    where
        S: MovieSource + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        let entries = source
            .now_playing()
            .await
            .map_err(|e| AppError::from_tmdb(Stage::NowPlaying, e))?;

        let count = entries.len();
        for (index, value) in entries.into_iter().enumerate() {
            let movie =
                parse_movie(index, value).map_err(|e| AppError::from_tmdb(Stage::NowPlaying, e))?;
            let position = self.movies.push(movie);
            surface.item_inserted(position, &self.movies[position]);
        }

        info!(count, "Loaded {} movies", count);
        Ok(count)
    }

    /// Rows for every movie in the list.
    pub fn rows(&self, orientation: Orientation) -> Vec<RowView> {
        bind_rows(&self.movies, &self.config, orientation)
    }
}
