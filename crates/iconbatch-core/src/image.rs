//! 8-bit image buffer.
//!
//! [`ImageData`] is the format-agnostic container passed between the I/O
//! and operations crates. Icon assets are 8-bit PNG/JPEG, so the buffer
//! is a single interleaved `Vec<u8>`; wider formats are converted to
//! 8 bits at decode time.

use crate::{Error, Rect, Result};

/// Image data container.
///
/// Pixels are stored row-major, top-to-bottom, channels interleaved.
/// Channel counts: 1 = grayscale, 2 = grayscale+alpha, 3 = RGB, 4 = RGBA.
///
/// # Example
///
/// ```rust
/// use iconbatch_core::ImageData;
///
/// let img = ImageData::from_data(2, 1, 3, vec![255, 0, 0, 0, 255, 0]).unwrap();
/// assert_eq!(img.pixel(1, 0), &[0, 255, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of channels (1, 2, 3 or 4).
    pub channels: u32,
    /// Raw interleaved pixel data.
    pub data: Vec<u8>,
}

impl ImageData {
    /// Creates a new image filled with zeros.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        let size = width as usize * height as usize * channels as usize;
        Self {
            width,
            height,
            channels,
            data: vec![0u8; size],
        }
    }

    /// Creates an image from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the buffer length does not
    /// equal `width * height * channels`, or [`Error::UnsupportedChannels`]
    /// for channel counts outside 1..=4.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        if !(1..=4).contains(&channels) {
            return Err(Error::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::InvalidDimensions(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Returns the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples (pixels * channels).
    pub fn sample_count(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }

    /// Returns the full image bounds as a rectangle at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Returns true if the channel layout carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Returns the samples of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let c = self.channels as usize;
        let idx = (y as usize * self.width as usize + x as usize) * c;
        &self.data[idx..idx + c]
    }

    /// Converts the image to RGBA, expanding grayscale and opaque layouts.
    ///
    /// Grayscale is replicated into R/G/B; images without an alpha channel
    /// get a fully opaque one. RGBA input is returned as a plain copy.
    pub fn to_rgba(&self) -> ImageData {
        let rgba: Vec<u8> = match self.channels {
            1 => self.data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
            2 => self
                .data
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            3 => self
                .data
                .chunks_exact(3)
                .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
                .collect(),
            _ => self.data.clone(),
        };
        ImageData {
            width: self.width,
            height: self.height,
            channels: 4,
            data: rgba,
        }
    }
}
