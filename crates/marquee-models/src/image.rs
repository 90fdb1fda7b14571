//! Image-serving configuration and URL construction.
//!
//! TMDB serves every image from a single base URL followed by a size token
//! (`w92`, `w185`, `original`, ...) and the image's relative path. The
//! configuration endpoint lists the tokens available for each image kind;
//! one token per kind is chosen when the configuration is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Index into `poster_sizes` used for list rows.
pub const POSTER_SIZE_INDEX: usize = 1;

/// Index into `backdrop_sizes` used for list rows.
pub const BACKDROP_SIZE_INDEX: usize = 1;

/// Kind of movie artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    Poster,
    Backdrop,
}

impl ImageKind {
    /// Placeholder shown while the image loads, on error, or when the movie
    /// has no image of this kind.
    pub fn placeholder(&self) -> Placeholder {
        match self {
            ImageKind::Poster => Placeholder::Poster,
            ImageKind::Backdrop => Placeholder::Backdrop,
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Poster => write!(f, "poster"),
            ImageKind::Backdrop => write!(f, "backdrop"),
        }
    }
}

/// Local placeholder artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    Poster,
    Backdrop,
}

impl Placeholder {
    /// Asset name of the bundled placeholder image.
    pub fn asset_name(&self) -> &'static str {
        match self {
            Placeholder::Poster => "movie_placeholder",
            Placeholder::Backdrop => "backdrop_placeholder",
        }
    }
}

/// Where a row's image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// Network image, with the placeholder to show until (or instead of) it.
    Remote { url: String, placeholder: Placeholder },
    /// No image path on the movie; only the placeholder is shown.
    Placeholder(Placeholder),
}

impl ImageSource {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Remote { url, .. } => Some(url),
            ImageSource::Placeholder(_) => None,
        }
    }

    pub fn placeholder(&self) -> Placeholder {
        match self {
            ImageSource::Remote { placeholder, .. } => *placeholder,
            ImageSource::Placeholder(placeholder) => *placeholder,
        }
    }
}

/// Concatenate base URL, size token and relative path, in that order.
///
/// TMDB relative paths start with `/` and base URLs end with `/`, so no
/// separator is inserted.
pub fn build_image_url(base_url: &str, size: &str, path: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + size.len() + path.len());
    url.push_str(base_url);
    url.push_str(size);
    url.push_str(path);
    url
}

/// Session-wide image configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageConfig {
    base_url: String,
    poster_sizes: Vec<String>,
    backdrop_sizes: Vec<String>,
    poster_size: String,
    backdrop_size: String,
}

impl ImageConfig {
    /// Build a configuration, choosing the poster and backdrop sizes at
    /// [`POSTER_SIZE_INDEX`] and [`BACKDROP_SIZE_INDEX`].
    pub fn new(
        base_url: impl Into<String>,
        poster_sizes: Vec<String>,
        backdrop_sizes: Vec<String>,
    ) -> ModelResult<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ModelError::EmptyBaseUrl);
        }

        let poster_size = pick_size(ImageKind::Poster, &poster_sizes, POSTER_SIZE_INDEX)?;
        let backdrop_size = pick_size(ImageKind::Backdrop, &backdrop_sizes, BACKDROP_SIZE_INDEX)?;

        Ok(Self {
            base_url,
            poster_sizes,
            backdrop_sizes,
            poster_size,
            backdrop_size,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn poster_sizes(&self) -> &[String] {
        &self.poster_sizes
    }

    pub fn backdrop_sizes(&self) -> &[String] {
        &self.backdrop_sizes
    }

    pub fn poster_size(&self) -> &str {
        &self.poster_size
    }

    pub fn backdrop_size(&self) -> &str {
        &self.backdrop_size
    }

    /// Chosen size token for an image kind.
    pub fn size_for(&self, kind: ImageKind) -> &str {
        match kind {
            ImageKind::Poster => &self.poster_size,
            ImageKind::Backdrop => &self.backdrop_size,
        }
    }

    /// Full URL for a relative image path at the given size.
    pub fn image_url(&self, size: &str, path: &str) -> String {
        build_image_url(&self.base_url, size, path)
    }

    /// Resolve the image for a movie's relative path.
    ///
    /// A missing or empty path never reaches the URL builder.
    pub fn resolve(&self, kind: ImageKind, path: Option<&str>) -> ImageSource {
        let placeholder = kind.placeholder();
        match path.filter(|p| !p.is_empty()) {
            Some(path) => ImageSource::Remote {
                url: self.image_url(self.size_for(kind), path),
                placeholder,
            },
            None => ImageSource::Placeholder(placeholder),
        }
    }
}

fn pick_size(kind: ImageKind, sizes: &[String], index: usize) -> ModelResult<String> {
    sizes
        .get(index)
        .cloned()
        .ok_or(ModelError::SizeIndexOutOfRange {
            kind,
            index,
            available: sizes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn config() -> ImageConfig {
        ImageConfig::new(
            "https://image.tmdb.org/t/p/",
            sizes(&["w92", "w154", "w185", "w342"]),
            sizes(&["w300", "w780", "w1280", "original"]),
        )
        .unwrap()
    }

    #[test]
    fn test_build_image_url_concatenates_in_order() {
        let cases = [
            ("https://image.tmdb.org/t/p/", "w185", "/abc.jpg"),
            ("a", "b", "c"),
            ("http://x/", "original", "/nested/path.png"),
        ];
        for (base, size, path) in cases {
            assert_eq!(build_image_url(base, size, path), format!("{base}{size}{path}"));
        }
    }

    #[test]
    fn test_chosen_poster_size_is_second_entry() {
        let config = ImageConfig::new(
            "https://image.tmdb.org/t/p/",
            sizes(&["w92", "w185"]),
            sizes(&["w300", "w780"]),
        )
        .unwrap();
        assert_eq!(config.poster_size(), "w185");
        assert_eq!(config.backdrop_size(), "w780");
    }

    #[test]
    fn test_short_poster_sizes_rejected() {
        let err = ImageConfig::new(
            "https://image.tmdb.org/t/p/",
            sizes(&["w92"]),
            sizes(&["w300", "w780"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::SizeIndexOutOfRange {
                kind: ImageKind::Poster,
                index: POSTER_SIZE_INDEX,
                available: 1,
            }
        );
    }

    #[test]
    fn test_empty_backdrop_sizes_rejected() {
        let err = ImageConfig::new("https://image.tmdb.org/t/p/", sizes(&["w92", "w185"]), vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::SizeIndexOutOfRange {
                kind: ImageKind::Backdrop,
                available: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = ImageConfig::new("  ", sizes(&["w92", "w185"]), sizes(&["w300", "w780"]))
            .unwrap_err();
        assert_eq!(err, ModelError::EmptyBaseUrl);
    }

    #[test]
    fn test_resolve_with_path() {
        let source = config().resolve(ImageKind::Poster, Some("/poster.jpg"));
        assert_eq!(
            source,
            ImageSource::Remote {
                url: "https://image.tmdb.org/t/p/w154/poster.jpg".to_string(),
                placeholder: Placeholder::Poster,
            }
        );
    }

    #[test]
    fn test_resolve_backdrop_uses_backdrop_size() {
        let source = config().resolve(ImageKind::Backdrop, Some("/back.jpg"));
        assert_eq!(source.url(), Some("https://image.tmdb.org/t/p/w780/back.jpg"));
        assert_eq!(source.placeholder(), Placeholder::Backdrop);
    }

    #[test]
    fn test_resolve_without_path_uses_placeholder() {
        let config = config();
        assert_eq!(
            config.resolve(ImageKind::Poster, None),
            ImageSource::Placeholder(Placeholder::Poster)
        );
        assert_eq!(
            config.resolve(ImageKind::Backdrop, Some("")),
            ImageSource::Placeholder(Placeholder::Backdrop)
        );
    }

    #[test]
    fn test_placeholder_asset_names() {
        assert_eq!(ImageKind::Poster.placeholder().asset_name(), "movie_placeholder");
        assert_eq!(ImageKind::Backdrop.placeholder().asset_name(), "backdrop_placeholder");
    }
}
