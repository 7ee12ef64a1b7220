//! PNG format support.
//!
//! Provides reading and writing of PNG files. All images are decoded to
//! 8 bits per channel; 16-bit files keep the high byte of each sample.
//! Grayscale and grayscale+alpha layouts are preserved as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use iconbatch_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use iconbatch_core::ImageData;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads a PNG file from the given path.
///
/// Palette images and sub-8-bit grayscale are expanded by the decoder;
/// interlaced files are deinterlaced.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let raw = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        color_type => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, info.bit_depth
            )));
        }
    };

    let data = match info.bit_depth {
        png::BitDepth::Eight => raw.to_vec(),
        // Big-endian 16-bit samples; keep the high byte.
        png::BitDepth::Sixteen => raw.iter().step_by(2).copied().collect(),
        bit_depth => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                info.color_type, bit_depth
            )));
        }
    };

    ImageData::from_data(width, height, channels, data)
        .map_err(|e| IoError::DecodeError(e.to_string()))
}

/// Writes an image to an 8-bit PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &ImageData) -> IoResult<()> {
    let color_type = match image.channels {
        1 => png::ColorType::Grayscale,
        2 => png::ColorType::GrayscaleAlpha,
        3 => png::ColorType::Rgb,
        4 => png::ColorType::Rgba,
        n => {
            return Err(IoError::EncodeError(format!(
                "unsupported channel count: {}",
                n
            )));
        }
    };

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&image.data)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_rgb() {
        let width = 32;
        let height = 32;
        let mut data = Vec::with_capacity((width * height * 3) as usize);

        for y in 0..height {
            for x in 0..width {
                data.push((x * 8) as u8);
                data.push((y * 8) as u8);
                data.push(128);
            }
        }

        let image = ImageData::from_data(width, height, 3, data.clone()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        write(&path, &image).expect("Failed to write PNG");
        let loaded = read(&path).expect("Failed to read PNG");

        assert_eq!(loaded.width, width);
        assert_eq!(loaded.height, height);
        assert_eq!(loaded.channels, 3);
        assert_eq!(loaded.data, data);
    }

    #[test]
    fn test_roundtrip_rgba() {
        let width = 16;
        let height = 16;
        let mut data = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            for x in 0..width {
                data.push((x * 16) as u8);
                data.push((y * 16) as u8);
                data.push(64);
                data.push((x * 10) as u8);
            }
        }

        let image = ImageData::from_data(width, height, 4, data.clone()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");

        write(&path, &image).expect("Failed to write PNG");
        let loaded = read(&path).expect("Failed to read PNG");

        assert_eq!(loaded.channels, 4);
        assert_eq!(loaded.data, data);
    }

    #[test]
    fn test_read_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(read(&path).is_err());
    }
}
