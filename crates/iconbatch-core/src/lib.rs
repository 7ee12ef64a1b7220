//! # iconbatch-core
//!
//! Core types for batch icon image processing.
//!
//! This crate provides the shared containers used by the I/O and
//! operations crates:
//!
//! - [`ImageData`] - 8-bit interleaved pixel buffer
//! - [`Rect`] - Pixel-space rectangle for crops and bounding boxes
//! - [`Error`] - Core error type
//!
//! # Memory Layout
//!
//! Images store pixels in **row-major** order, top-to-bottom. For RGBA
//! images the channels are interleaved: `[R G B A R G B A ...]`.
//!
//! # Quick Start
//!
//! ```rust
//! use iconbatch_core::{ImageData, Rect};
//!
//! let img = ImageData::new(64, 64, 4);
//! assert_eq!(img.sample_count(), 64 * 64 * 4);
//!
//! let roi = Rect::new(0, 0, 32, 32);
//! assert!(roi.intersect(&img.bounds()).is_some());
//! ```

#![warn(missing_docs)]

mod error;
mod image;
mod rect;

pub use error::{Error, Result};
pub use image::ImageData;
pub use rect::Rect;
