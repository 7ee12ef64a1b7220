//! Rectangular crop.

use crate::{OpsError, OpsResult};
use iconbatch_core::{ImageData, Rect};

/// Crops an image to `region` intersected with the image bounds.
///
/// The requested region may extend past the image edges; only the
/// overlapping part is kept.
///
/// # Errors
///
/// Returns [`OpsError::EmptyCrop`] if the region does not overlap the
/// image at all.
pub fn crop(image: &ImageData, region: Rect) -> OpsResult<ImageData> {
    let clipped = region.intersect(&image.bounds()).ok_or_else(|| {
        OpsError::EmptyCrop(format!(
            "{}x{}+{}+{} vs {}x{} image",
            region.width, region.height, region.x, region.y, image.width, image.height
        ))
    })?;

    let channels = image.channels as usize;
    let src_stride = image.width as usize * channels;
    let row_bytes = clipped.width as usize * channels;

    let mut data = Vec::with_capacity(clipped.height as usize * row_bytes);
    for y in clipped.y..clipped.bottom() {
        let start = y as usize * src_stride + clipped.x as usize * channels;
        data.extend_from_slice(&image.data[start..start + row_bytes]);
    }

    Ok(ImageData {
        width: clipped.width,
        height: clipped.height,
        channels: image.channels,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> ImageData {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                data.push(x as u8);
                data.push(y as u8);
                data.push(0);
            }
        }
        ImageData::from_data(width, height, 3, data).unwrap()
    }

    #[test]
    fn test_crop_interior() {
        let img = gradient(8, 8);
        let out = crop(&img, Rect::new(2, 3, 4, 2)).unwrap();
        assert_eq!((out.width, out.height), (4, 2));
        assert_eq!(out.pixel(0, 0), &[2, 3, 0]);
        assert_eq!(out.pixel(3, 1), &[5, 4, 0]);
    }

    #[test]
    fn test_crop_full_bounds_is_identity() {
        let img = gradient(6, 4);
        let out = crop(&img, img.bounds()).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_crop_clips_to_bounds() {
        let img = gradient(6, 4);
        // Band wider and taller than the image
        let out = crop(&img, Rect::from_ltrb(0, 2, 100, 100)).unwrap();
        assert_eq!((out.width, out.height), (6, 2));
        assert_eq!(out.pixel(0, 0), &[0, 2, 0]);
    }

    #[test]
    fn test_crop_outside_bounds_fails() {
        let img = gradient(6, 4);
        assert!(matches!(
            crop(&img, Rect::new(10, 10, 5, 5)),
            Err(OpsError::EmptyCrop(_))
        ));
    }
}
