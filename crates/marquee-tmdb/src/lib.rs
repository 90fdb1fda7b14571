//! TMDB REST API client.
//!
//! This crate provides:
//! - Image configuration lookup (`/configuration`)
//! - Now-playing movie list (`/movie/now_playing`)
//! - Error taxonomy separating network from parse failures
//! - Request metrics

pub mod client;
pub mod error;
pub mod metrics;
pub mod types;

pub use client::{parse_movie, TmdbClient, TmdbConfig, DEFAULT_BASE_URL};
pub use error::{TmdbError, TmdbResult};
pub use types::{ConfigurationResponse, ImagesConfiguration, NowPlayingResponse};
