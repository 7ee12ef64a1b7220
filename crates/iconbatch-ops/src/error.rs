//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Images have incompatible sizes.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: String,
        /// Actual size.
        actual: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Image has no opaque pixels to compute a bounding box from.
    #[error("image is fully transparent")]
    EmptyImage,

    /// Crop region does not overlap the image.
    #[error("crop region outside image: {0}")]
    EmptyCrop(String),

    /// Underlying file or codec error.
    #[error(transparent)]
    Io(#[from] iconbatch_io::IoError),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
