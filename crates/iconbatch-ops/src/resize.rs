//! Image resize and resampling operations.
//!
//! Provides high-quality scaling of 8-bit images using separable
//! interpolation filters.
//!
//! # Filters
//!
//! - [`Filter::Nearest`] - Fastest, no interpolation (blocky)
//! - [`Filter::Bilinear`] - Linear interpolation (smooth but blurry)
//! - [`Filter::Bicubic`] - Cubic interpolation (sharper than bilinear)
//! - [`Filter::Lanczos3`] - High-quality sinc-based (best for downscaling)
//!
//! # Example
//!
//! ```rust
//! use iconbatch_core::ImageData;
//! use iconbatch_ops::resize::{resize, Filter};
//!
//! let src = ImageData::new(64, 64, 4);
//! let dst = resize(&src, 128, 128, Filter::Lanczos3).unwrap();
//! assert_eq!((dst.width, dst.height), (128, 128));
//! ```

use crate::{OpsError, OpsResult};
use iconbatch_core::ImageData;
use std::str::FromStr;

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    Bilinear,
    /// Bicubic interpolation (sharper than bilinear).
    Bicubic,
    /// Lanczos-3 (high quality, best for downscaling).
    #[default]
    Lanczos3,
}

impl Filter {
    /// Returns the support radius for this filter.
    #[inline]
    pub fn support(&self) -> f32 {
        match self {
            Filter::Nearest => 0.5,
            Filter::Bilinear => 1.0,
            Filter::Bicubic => 2.0,
            Filter::Lanczos3 => 3.0,
        }
    }

    /// Evaluates the filter kernel at position x.
    #[inline]
    pub fn weight(&self, x: f32) -> f32 {
        match self {
            Filter::Nearest => nearest_weight(x),
            Filter::Bilinear => bilinear_weight(x),
            Filter::Bicubic => bicubic_weight(x),
            Filter::Lanczos3 => lanczos_weight(x, 3.0),
        }
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(Filter::Nearest),
            "bilinear" => Ok(Filter::Bilinear),
            "bicubic" => Ok(Filter::Bicubic),
            "lanczos" | "lanczos3" => Ok(Filter::Lanczos3),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown filter: {}",
                other
            ))),
        }
    }
}

/// Nearest-neighbor weight function.
#[inline]
fn nearest_weight(x: f32) -> f32 {
    if x.abs() < 0.5 { 1.0 } else { 0.0 }
}

/// Bilinear (triangle) weight function.
#[inline]
fn bilinear_weight(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 1.0 { 1.0 - ax } else { 0.0 }
}

/// Bicubic (Mitchell-Netravali) weight function.
#[inline]
fn bicubic_weight(x: f32) -> f32 {
    // Mitchell-Netravali with B=1/3, C=1/3
    const B: f32 = 1.0 / 3.0;
    const C: f32 = 1.0 / 3.0;

    let ax = x.abs();
    if ax < 1.0 {
        ((12.0 - 9.0 * B - 6.0 * C) * ax * ax * ax
            + (-18.0 + 12.0 * B + 6.0 * C) * ax * ax
            + (6.0 - 2.0 * B))
            / 6.0
    } else if ax < 2.0 {
        ((-B - 6.0 * C) * ax * ax * ax
            + (6.0 * B + 30.0 * C) * ax * ax
            + (-12.0 * B - 48.0 * C) * ax
            + (8.0 * B + 24.0 * C))
            / 6.0
    } else {
        0.0
    }
}

/// Lanczos weight function.
#[inline]
fn lanczos_weight(x: f32, a: f32) -> f32 {
    let ax = x.abs();
    if ax < 1e-8 {
        1.0
    } else if ax < a {
        let pi_x = std::f32::consts::PI * ax;
        let pi_x_a = pi_x / a;
        (pi_x.sin() / pi_x) * (pi_x_a.sin() / pi_x_a)
    } else {
        0.0
    }
}

/// Resizes an image to exact target dimensions.
///
/// Uses a two-pass separable resample (horizontal then vertical) with f32
/// accumulation, rounding back to u8 at the end.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if either target dimension
/// is zero.
pub fn resize(image: &ImageData, dst_w: u32, dst_h: u32, filter: Filter) -> OpsResult<ImageData> {
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidDimensions(
            "destination size must be > 0".into(),
        ));
    }

    if dst_w == image.width && dst_h == image.height {
        return Ok(image.clone());
    }

    let src_w = image.width as usize;
    let src_h = image.height as usize;
    let channels = image.channels as usize;

    let src: Vec<f32> = image.data.iter().map(|&v| v as f32).collect();

    let temp = resize_horizontal(&src, src_w, src_h, channels, dst_w as usize, filter);
    let result = resize_vertical(&temp, dst_w as usize, src_h, channels, dst_h as usize, filter);

    let data: Vec<u8> = result.iter().map(|&v| v.round().clamp(0.0, 255.0) as u8).collect();

    Ok(ImageData {
        width: dst_w,
        height: dst_h,
        channels: image.channels,
        data,
    })
}

/// Horizontal resize pass.
fn resize_horizontal(
    src: &[f32],
    src_w: usize,
    src_h: usize,
    channels: usize,
    dst_w: usize,
    filter: Filter,
) -> Vec<f32> {
    let mut dst = vec![0.0f32; dst_w * src_h * channels];
    let scale = src_w as f32 / dst_w as f32;
    let support = filter.support() * scale.max(1.0);

    for y in 0..src_h {
        for x in 0..dst_w {
            // Map destination x to source x
            let center = (x as f32 + 0.5) * scale - 0.5;
            let left = ((center - support).floor() as isize).max(0) as usize;
            let right = ((center + support).ceil() as usize).min(src_w - 1);

            let mut sum = vec![0.0f32; channels];
            let mut weight_sum = 0.0f32;

            for sx in left..=right {
                let dist = (sx as f32 - center) / scale.max(1.0);
                let w = filter.weight(dist);
                weight_sum += w;

                let src_idx = (y * src_w + sx) * channels;
                for c in 0..channels {
                    sum[c] += src[src_idx + c] * w;
                }
            }

            let dst_idx = (y * dst_w + x) * channels;
            if weight_sum > 0.0 {
                for c in 0..channels {
                    dst[dst_idx + c] = sum[c] / weight_sum;
                }
            }
        }
    }

    dst
}

/// Vertical resize pass.
fn resize_vertical(
    src: &[f32],
    src_w: usize,
    src_h: usize,
    channels: usize,
    dst_h: usize,
    filter: Filter,
) -> Vec<f32> {
    let mut dst = vec![0.0f32; src_w * dst_h * channels];
    let scale = src_h as f32 / dst_h as f32;
    let support = filter.support() * scale.max(1.0);

    for y in 0..dst_h {
        // Map destination y to source y
        let center = (y as f32 + 0.5) * scale - 0.5;
        let top = ((center - support).floor() as isize).max(0) as usize;
        let bottom = ((center + support).ceil() as usize).min(src_h - 1);

        for x in 0..src_w {
            let mut sum = vec![0.0f32; channels];
            let mut weight_sum = 0.0f32;

            for sy in top..=bottom {
                let dist = (sy as f32 - center) / scale.max(1.0);
                let w = filter.weight(dist);
                weight_sum += w;

                let src_idx = (sy * src_w + x) * channels;
                for c in 0..channels {
                    sum[c] += src[src_idx + c] * w;
                }
            }

            let dst_idx = (y * src_w + x) * channels;
            if weight_sum > 0.0 {
                for c in 0..channels {
                    dst[dst_idx + c] = sum[c] / weight_sum;
                }
            }
        }
    }

    dst
}
