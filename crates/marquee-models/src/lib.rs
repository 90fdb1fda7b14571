//! Shared data models for the Marquee client.
//!
//! This crate provides:
//! - Image-serving configuration and the image URL builder
//! - Movie summaries and the append-only movie list
//! - Device orientation and placeholder selection

pub mod error;
pub mod image;
pub mod movie;
pub mod movie_list;
pub mod orientation;

// Re-export common types
pub use error::{ModelError, ModelResult};
pub use image::{
    build_image_url, ImageConfig, ImageKind, ImageSource, Placeholder, BACKDROP_SIZE_INDEX,
    POSTER_SIZE_INDEX,
};
pub use movie::MovieSummary;
pub use movie_list::MovieList;
pub use orientation::Orientation;
