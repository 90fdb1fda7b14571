//! Binding movies to display rows and the detail view.

use std::fmt;

use marquee_models::{ImageConfig, ImageSource, MovieList, MovieSummary, Orientation};
use serde::{Deserialize, Serialize};

/// Everything a row needs to draw one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    pub position: usize,
    pub title: String,
    pub overview: String,
    pub image: ImageSource,
}

/// Bind one movie for the given orientation.
///
/// Portrait rows use the poster path and poster size, landscape rows the
/// backdrop path and backdrop size. A movie without the relevant path gets
/// the matching placeholder.
pub fn bind_row(
    position: usize,
    movie: &MovieSummary,
    config: &ImageConfig,
    orientation: Orientation,
) -> RowView {
    let kind = orientation.image_kind();
    RowView {
        position,
        title: movie.title.clone(),
        overview: movie.overview.clone(),
        image: config.resolve(kind, movie.image_path(kind)),
    }
}

pub fn bind_rows(movies: &MovieList, config: &ImageConfig, orientation: Orientation) -> Vec<RowView> {
    movies
        .iter()
        .enumerate()
        .map(|(position, movie)| bind_row(position, movie, config, orientation))
        .collect()
}

/// Detail screen for a selected movie; owns its copy of the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub movie: MovieSummary,
}

impl From<MovieSummary> for DetailView {
    fn from(movie: MovieSummary) -> Self {
        Self { movie }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.movie.title)?;
        if let Some(rating) = self.movie.vote_average {
            writeln!(f, "Rating: {:.1}/10", rating)?;
        }
        write!(f, "{}", self.movie.overview)
    }
}

/// Open the detail view for the row at `position`, if that row exists.
pub fn open_detail(movies: &MovieList, position: usize) -> Option<DetailView> {
    movies.get(position).cloned().map(DetailView::from)
}
