//! JPEG format support.
//!
//! Provides reading and writing of JPEG files. JPEG carries no alpha
//! channel, so decoded images are grayscale or RGB; alpha is stripped
//! when writing.
//!
//! # Example
//!
//! ```rust,ignore
//! use iconbatch_io::jpeg;
//!
//! let image = jpeg::read("photo.jpg")?;
//! jpeg::write("copy.jpg", &image, 90)?;
//! ```

use crate::{IoError, IoResult};
use iconbatch_core::ImageData;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default encode quality (1-100).
pub const DEFAULT_QUALITY: u8 = 90;

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let (channels, data) = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => (3, pixels),
        jpeg_decoder::PixelFormat::L8 => (1, pixels),
        jpeg_decoder::PixelFormat::L16 => {
            // Big-endian 16-bit luma; keep the high byte.
            (1, pixels.iter().step_by(2).copied().collect())
        }
        jpeg_decoder::PixelFormat::CMYK32 => {
            // Approximate CMYK to RGB conversion.
            let rgb: Vec<u8> = pixels
                .chunks_exact(4)
                .flat_map(|cmyk| {
                    let c = cmyk[0] as f32 / 255.0;
                    let m = cmyk[1] as f32 / 255.0;
                    let y = cmyk[2] as f32 / 255.0;
                    let k = cmyk[3] as f32 / 255.0;

                    let r = ((1.0 - c) * (1.0 - k) * 255.0) as u8;
                    let g = ((1.0 - m) * (1.0 - k) * 255.0) as u8;
                    let b = ((1.0 - y) * (1.0 - k) * 255.0) as u8;

                    [r, g, b]
                })
                .collect();
            (3, rgb)
        }
    };

    ImageData::from_data(width, height, channels, data)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an image to a JPEG file with the given quality (1-100).
///
/// Alpha channels are stripped; grayscale input stays grayscale.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData, quality: u8) -> IoResult<()> {
    use jpeg_encoder::{ColorType, Encoder};

    let (color_type, pixel_data): (ColorType, Vec<u8>) = match image.channels {
        1 => (ColorType::Luma, image.data.clone()),
        2 => (
            ColorType::Luma,
            image.data.iter().step_by(2).copied().collect(),
        ),
        3 => (ColorType::Rgb, image.data.clone()),
        4 => (
            ColorType::Rgb,
            image
                .data
                .chunks_exact(4)
                .flat_map(|rgba| [rgba[0], rgba[1], rgba[2]])
                .collect(),
        ),
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )));
        }
    };

    let mut buffer = Vec::new();
    let encoder = Encoder::new(&mut buffer, quality);
    encoder
        .encode(
            &pixel_data,
            image.width as u16,
            image.height as u16,
            color_type,
        )
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    std::fs::write(path.as_ref(), buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_rgb_dimensions() {
        let width = 24;
        let height = 24;
        let data = vec![200u8; (width * height * 3) as usize];
        let image = ImageData::from_data(width, height, 3, data).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.jpg");

        write(&path, &image, DEFAULT_QUALITY).expect("Failed to write JPEG");
        let loaded = read(&path).expect("Failed to read JPEG");

        assert_eq!(loaded.width, width);
        assert_eq!(loaded.height, height);
        assert_eq!(loaded.channels, 3);

        // Lossy but a flat image should stay close.
        for &v in &loaded.data {
            assert!((v as i16 - 200).abs() <= 4, "value {} drifted", v);
        }
    }

    #[test]
    fn test_write_strips_alpha() {
        let image = ImageData::from_data(2, 1, 4, vec![10, 20, 30, 255, 40, 50, 60, 0]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.jpg");

        write(&path, &image, DEFAULT_QUALITY).unwrap();
        let loaded = read(&path).unwrap();
        assert_eq!(loaded.channels, 3);
    }

    #[test]
    fn test_read_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"not a jpeg at all").unwrap();

        assert!(read(&path).is_err());
    }
}
