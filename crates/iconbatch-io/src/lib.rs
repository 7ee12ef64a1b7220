//! # iconbatch-io
//!
//! PNG and JPEG I/O for batch icon processing.
//!
//! Icon assets are 8-bit PNG (with alpha) or JPEG files; this crate decodes
//! both into [`ImageData`] and encodes [`ImageData`] back out:
//!
//! - **PNG** - Lossless with alpha support
//! - **JPEG** - Lossy, no alpha
//!
//! # Architecture
//!
//! - [`Format`] - Format detection by magic bytes and extension
//! - [`read`] / [`write`] - High-level functions with format auto-detection
//! - [`png`] / [`jpeg`] - Format-specific modules
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use iconbatch_io::{read, write};
//!
//! // Read any supported format (auto-detected)
//! let image = read("icon.jpg")?;
//!
//! // Write to a different format
//! write("icon.png", &image)?;
//! ```

#![warn(missing_docs)]

mod detect;
mod error;

pub mod jpeg;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use iconbatch_core::ImageData;

use std::path::Path;

/// Reads an image from a file, auto-detecting the format.
///
/// The format is detected by magic bytes, falling back to the file
/// extension.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, or the file is corrupted.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    tracing::debug!(path = %path.display(), ?format, "read");

    match format {
        Format::Png => png::read(path),
        Format::Jpeg => jpeg::read(path),
        Format::Unknown => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

/// Writes an image to a file, detecting the format from the extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created, the extension is not
/// a supported format, or the image data is incompatible with it.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    tracing::debug!(path = %path.display(), ?format, "write");

    match format {
        Format::Png => png::write(path, image),
        Format::Jpeg => jpeg::write(path, image, jpeg::DEFAULT_QUALITY),
        Format::Unknown => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_extension() {
        let image = ImageData::from_data(4, 4, 3, vec![128; 4 * 4 * 3]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("a.png");
        let jpg_path = dir.path().join("a.jpg");

        write(&png_path, &image).unwrap();
        write(&jpg_path, &image).unwrap();

        assert_eq!(Format::from_magic_bytes(&png_path).unwrap(), Format::Png);
        assert_eq!(Format::from_magic_bytes(&jpg_path).unwrap(), Format::Jpeg);

        assert_eq!(read(&png_path).unwrap().data, image.data);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let image = ImageData::new(2, 2, 3);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.bmp");

        assert!(matches!(
            write(&path, &image),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
