//! # iconbatch-ops
//!
//! Image operations and the batch engine for icon processing.
//!
//! The primitives operate on in-memory [`iconbatch_core::ImageData`]:
//!
//! - [`resize`] - Separable resampling with selectable filters
//! - [`crop`] - Rectangular crop clipped to image bounds
//! - [`alpha`] - Alpha mask extraction/application and opaque bounding box
//!
//! [`batch`] ties them to the filesystem: one synchronous pass over a
//! directory snapshot, applying a reference-derived transform to every
//! matching file with per-file failure tolerance.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use iconbatch_ops::batch::{trim_transparent, OutputTarget};
//!
//! let report = trim_transparent("icons/".as_ref(), &OutputTarget::InPlace)?;
//! for (path, error) in &report.failed {
//!     eprintln!("skipped {}: {}", path.display(), error);
//! }
//! ```

#![warn(missing_docs)]

pub mod alpha;
pub mod batch;
pub mod crop;
mod error;
pub mod resize;

pub use error::{OpsError, OpsResult};
pub use resize::Filter;
