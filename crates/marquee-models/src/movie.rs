//! Movie summary as listed by the now-playing endpoint.

use serde::{Deserialize, Serialize};

use crate::image::ImageKind;

/// One entry of the now-playing list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// TMDB movie ID
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub overview: String,
    /// Poster path relative to the image base URL
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Backdrop path relative to the image base URL
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// Average user rating (0-10)
    #[serde(default)]
    pub vote_average: Option<f64>,
}

impl MovieSummary {
    pub fn new(title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            overview: overview.into(),
            poster_path: None,
            backdrop_path: None,
            vote_average: None,
        }
    }

    pub fn with_poster_path(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    pub fn with_backdrop_path(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    /// Relative path of the image of the given kind, if any.
    pub fn image_path(&self, kind: ImageKind) -> Option<&str> {
        match kind {
            ImageKind::Poster => self.poster_path.as_deref(),
            ImageKind::Backdrop => self.backdrop_path.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_entry() {
        let json = serde_json::json!({
            "id": 550,
            "title": "Fight Club",
            "overview": "An insomniac office worker...",
            "poster_path": "/poster.jpg",
            "backdrop_path": null,
            "vote_average": 8.4,
            "popularity": 61.4
        });
        let movie: MovieSummary = serde_json::from_value(json).unwrap();
        assert_eq!(movie.id, Some(550));
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.image_path(ImageKind::Poster), Some("/poster.jpg"));
        assert_eq!(movie.image_path(ImageKind::Backdrop), None);
        assert_eq!(movie.vote_average, Some(8.4));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = serde_json::json!({ "title": "T", "overview": "O" });
        let movie: MovieSummary = serde_json::from_value(json).unwrap();
        assert_eq!(movie, MovieSummary::new("T", "O"));
    }

    #[test]
    fn test_missing_title_is_error() {
        let json = serde_json::json!({ "overview": "O" });
        assert!(serde_json::from_value::<MovieSummary>(json).is_err());
    }
}
