//! Append-only list of movies backing the display surface.

use std::ops::Index;

use crate::movie::MovieSummary;

/// Movies in API response order.
///
/// Entries are only ever appended; mutation requires `&mut`, so the list
/// has a single writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieList {
    movies: Vec<MovieSummary>,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a movie and return its index.
    pub fn push(&mut self, movie: MovieSummary) -> usize {
        self.movies.push(movie);
        self.movies.len() - 1
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MovieSummary> {
        self.movies.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieSummary> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[MovieSummary] {
        &self.movies
    }
}

impl Index<usize> for MovieList {
    type Output = MovieSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.movies[index]
    }
}

impl<'a> IntoIterator for &'a MovieList {
    type Item = &'a MovieSummary;
    type IntoIter = std::slice::Iter<'a, MovieSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}
