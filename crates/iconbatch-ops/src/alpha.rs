//! Alpha channel operations.
//!
//! Extracting an alpha mask, applying a mask to another image, and
//! computing the bounding box of the opaque region.

use crate::{OpsError, OpsResult};
use iconbatch_core::{ImageData, Rect};

/// Extracts the alpha channel as a single-channel mask.
///
/// Images without an alpha channel yield a fully opaque mask, matching
/// the RGBA expansion in [`ImageData::to_rgba`].
pub fn alpha_mask(image: &ImageData) -> Vec<u8> {
    match image.channels {
        2 => image.data.iter().skip(1).step_by(2).copied().collect(),
        4 => image.data.iter().skip(3).step_by(4).copied().collect(),
        _ => vec![255u8; image.pixel_count()],
    }
}

/// Replaces the alpha channel of an image with `mask`.
///
/// The input is normalized to RGBA first, so RGB and grayscale images are
/// accepted. The mask dimensions must match the image exactly; per-pixel
/// assignment has no meaning otherwise.
///
/// # Errors
///
/// Returns [`OpsError::DimensionMismatch`] if `(mask_w, mask_h)` differs
/// from the image dimensions.
pub fn apply_alpha(
    image: &ImageData,
    mask: &[u8],
    mask_w: u32,
    mask_h: u32,
) -> OpsResult<ImageData> {
    if (image.width, image.height) != (mask_w, mask_h) {
        return Err(OpsError::DimensionMismatch {
            expected: format!("{}x{}", mask_w, mask_h),
            actual: format!("{}x{}", image.width, image.height),
        });
    }

    let mut rgba = image.to_rgba();
    for (pixel, &a) in rgba.data.chunks_exact_mut(4).zip(mask) {
        pixel[3] = a;
    }
    Ok(rgba)
}

/// Computes the bounding box of pixels with alpha > 0.
///
/// Images without an alpha channel are fully opaque and yield the full
/// image bounds.
///
/// # Errors
///
/// Returns [`OpsError::EmptyImage`] if every pixel is fully transparent.
pub fn opaque_bounds(image: &ImageData) -> OpsResult<Rect> {
    if !image.has_alpha() {
        return Ok(image.bounds());
    }

    let channels = image.channels as usize;
    let alpha_offset = channels - 1;

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for y in 0..image.height {
        let row = (y as usize * image.width as usize) * channels;
        for x in 0..image.width {
            if image.data[row + x as usize * channels + alpha_offset] > 0 {
                found = true;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    if !found {
        return Err(OpsError::EmptyImage);
    }

    Ok(Rect::from_ltrb(min_x, min_y, max_x + 1, max_y + 1))
}
