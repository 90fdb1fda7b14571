//! Model error types.

use thiserror::Error;

use crate::image::ImageKind;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Image base URL is empty")]
    EmptyBaseUrl,

    #[error("No {kind} size at index {index} ({available} available)")]
    SizeIndexOutOfRange {
        kind: ImageKind,
        index: usize,
        available: usize,
    },

    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),
}
