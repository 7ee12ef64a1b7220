//! Error types for core image containers.

use thiserror::Error;

/// Core error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length or dimensions are inconsistent.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Unsupported channel count (1, 2, 3 and 4 are valid).
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u32),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
