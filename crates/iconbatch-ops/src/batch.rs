//! Batch engine: apply a reference-derived transform to every matching
//! file in a directory.
//!
//! All five operations share the same shape: snapshot the directory once,
//! process each qualifying file to completion before the next, convert any
//! per-file failure into a report entry and keep going. Only loading the
//! reference image (and creating the output directory) can abort a run.
//!
//! Writes are not transactional: a crash mid-run leaves a partially
//! processed directory. That is an accepted limitation of the tool.
//!
//! # Example
//!
//! ```rust,ignore
//! use iconbatch_ops::batch::{resize_to_reference, OutputTarget, DEFAULT_REFERENCE};
//! use iconbatch_ops::resize::Filter;
//!
//! let report = resize_to_reference(
//!     "icons/".as_ref(),
//!     DEFAULT_REFERENCE,
//!     Filter::Lanczos3,
//!     &OutputTarget::InPlace,
//! )?;
//! println!("{} ok, {} failed", report.processed.len(), report.failed.len());
//! ```

use crate::alpha::{alpha_mask, apply_alpha, opaque_bounds};
use crate::crop::crop;
use crate::resize::{Filter, resize};
use crate::OpsResult;
use iconbatch_core::Rect;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Conventional reference image filename.
pub const DEFAULT_REFERENCE: &str = "test.png";

/// Where a batch operation writes its results.
///
/// Overwriting sources is an explicit choice, never an implicit default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Overwrite each source file.
    InPlace,
    /// Write results into this directory (created if absent), keeping
    /// the source filename.
    Dir(PathBuf),
}

impl OutputTarget {
    /// Creates the output directory if needed.
    fn prepare(&self) -> OpsResult<()> {
        if let OutputTarget::Dir(dir) = self {
            std::fs::create_dir_all(dir).map_err(iconbatch_io::IoError::Io)?;
        }
        Ok(())
    }

    /// Resolves the output path for a source file.
    fn resolve(&self, source: &Path) -> PathBuf {
        match self {
            OutputTarget::InPlace => source.to_path_buf(),
            OutputTarget::Dir(dir) => {
                let name = source.file_name().unwrap_or_else(|| OsStr::new("output"));
                dir.join(name)
            }
        }
    }
}

/// Outcome of a batch run: which files were written and which failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files processed successfully.
    pub processed: Vec<PathBuf>,
    /// Files skipped after a per-file error, with the error message.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Returns true if no file failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: OpsResult<()>) {
        match result {
            Ok(()) => {
                debug!(path = %path.display(), "processed");
                self.processed.push(path);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipped");
                self.failed.push((path, e.to_string()));
            }
        }
    }
}

/// Lists files in `dir` whose extension matches one of `extensions`
/// (case-insensitive), excluding `exclude` by filename.
///
/// The listing is a single snapshot, sorted for deterministic order.
fn list_targets(dir: &Path, extensions: &[&str], exclude: Option<&str>) -> OpsResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = std::fs::read_dir(dir).map_err(iconbatch_io::IoError::Io)?;
    for entry in entries {
        let entry = entry.map_err(iconbatch_io::IoError::Io)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = exclude {
            if path.file_name().is_some_and(|f| f == OsStr::new(name)) {
                continue;
            }
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| extensions.iter().any(|x| e.eq_ignore_ascii_case(x)));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Resizes every PNG in `dir` (except the reference) to the reference
/// image's exact pixel dimensions.
///
/// # Errors
///
/// Fails fast if the reference image is missing or undecodable; without
/// it there is no target size. Per-file failures land in the report.
pub fn resize_to_reference(
    dir: &Path,
    reference: &str,
    filter: Filter,
    target: &OutputTarget,
) -> OpsResult<BatchReport> {
    let reference_path = dir.join(reference);
    let reference_img = iconbatch_io::read(&reference_path)?;
    let (ref_w, ref_h) = (reference_img.width, reference_img.height);
    debug!(reference = %reference_path.display(), width = ref_w, height = ref_h, "reference size");

    target.prepare()?;

    let mut report = BatchReport::default();
    for path in list_targets(dir, &["png"], Some(reference))? {
        let result = (|| {
            let image = iconbatch_io::read(&path)?;
            let resized = resize(&image, ref_w, ref_h, filter)?;
            iconbatch_io::write(target.resolve(&path), &resized)?;
            Ok(())
        })();
        report.record(path, result);
    }
    Ok(report)
}

/// Copies the reference image's alpha channel onto every other PNG in
/// `dir`.
///
/// The reference is normalized to RGBA and its mask extracted once per
/// run. Targets whose dimensions differ from the reference are reported
/// and skipped; the mask is never resized to fit.
///
/// # Errors
///
/// Fails fast if the reference image is missing or undecodable.
pub fn copy_alpha_from_reference(
    dir: &Path,
    reference: &str,
    target: &OutputTarget,
) -> OpsResult<BatchReport> {
    let reference_path = dir.join(reference);
    let reference_img = iconbatch_io::read(&reference_path)?.to_rgba();
    let mask = alpha_mask(&reference_img);
    let (mask_w, mask_h) = (reference_img.width, reference_img.height);

    target.prepare()?;

    let mut report = BatchReport::default();
    for path in list_targets(dir, &["png"], Some(reference))? {
        let result = (|| {
            let image = iconbatch_io::read(&path)?;
            let masked = apply_alpha(&image, &mask, mask_w, mask_h)?;
            iconbatch_io::write(target.resolve(&path), &masked)?;
            Ok(())
        })();
        report.record(path, result);
    }
    Ok(report)
}

/// Crops every PNG in `dir` to `region` (clipped to each image's bounds)
/// and writes the results into `output_dir` under the same filenames.
///
/// Sources are never overwritten; `output_dir` is created if absent.
pub fn crop_to_rect(dir: &Path, output_dir: &Path, region: Rect) -> OpsResult<BatchReport> {
    let target = OutputTarget::Dir(output_dir.to_path_buf());
    target.prepare()?;

    let mut report = BatchReport::default();
    for path in list_targets(dir, &["png"], None)? {
        let result = (|| {
            let image = iconbatch_io::read(&path)?;
            let cropped = crop(&image, region)?;
            iconbatch_io::write(target.resolve(&path), &cropped)?;
            Ok(())
        })();
        report.record(path, result);
    }
    Ok(report)
}

/// Trims fully transparent borders from every PNG in `dir`.
///
/// Each image is cropped to the bounding box of its pixels with alpha > 0.
/// A fully transparent image has no such box: it is reported as failed
/// and left unmodified while the batch continues.
pub fn trim_transparent(dir: &Path, target: &OutputTarget) -> OpsResult<BatchReport> {
    target.prepare()?;

    let mut report = BatchReport::default();
    for path in list_targets(dir, &["png"], None)? {
        let result = (|| {
            let image = iconbatch_io::read(&path)?;
            let bounds = opaque_bounds(&image)?;
            let trimmed = crop(&image, bounds)?;
            iconbatch_io::write(target.resolve(&path), &trimmed)?;
            Ok(())
        })();
        report.record(path, result);
    }
    Ok(report)
}

/// Re-encodes every `.jpg`/`.jpeg` in `dir` as a sibling `.png` with the
/// same stem. Originals are kept.
pub fn convert_to_png(dir: &Path) -> OpsResult<BatchReport> {
    let mut report = BatchReport::default();
    for path in list_targets(dir, &["jpg", "jpeg"], None)? {
        let result = (|| {
            let image = iconbatch_io::read(&path)?;
            iconbatch_io::write(path.with_extension("png"), &image)?;
            Ok(())
        })();
        report.record(path, result);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconbatch_core::ImageData;
    use std::path::Path;

    fn write_png(dir: &Path, name: &str, image: &ImageData) -> PathBuf {
        let path = dir.join(name);
        iconbatch_io::png::write(&path, image).unwrap();
        path
    }

    fn opaque_rgba(width: u32, height: u32, value: u8) -> ImageData {
        let mut img = ImageData::new(width, height, 4);
        for pixel in img.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[value, value, value, 255]);
        }
        img
    }

    #[test]
    fn test_resize_to_reference_matches_reference_size() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "test.png", &opaque_rgba(100, 100, 10));
        let icon = write_png(dir.path(), "icon1.png", &opaque_rgba(50, 50, 20));

        let report = resize_to_reference(
            dir.path(),
            DEFAULT_REFERENCE,
            Filter::Lanczos3,
            &OutputTarget::InPlace,
        )
        .unwrap();

        assert!(report.is_clean());
        assert_eq!(report.processed, vec![icon.clone()]);

        let resized = iconbatch_io::read(&icon).unwrap();
        assert_eq!((resized.width, resized.height), (100, 100));

        // The reference itself is never a target.
        let reference = iconbatch_io::read(dir.path().join("test.png")).unwrap();
        assert_eq!((reference.width, reference.height), (100, 100));
    }

    #[test]
    fn test_resize_missing_reference_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "icon1.png", &opaque_rgba(8, 8, 0));

        let result = resize_to_reference(
            dir.path(),
            DEFAULT_REFERENCE,
            Filter::Lanczos3,
            &OutputTarget::InPlace,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_resize_skips_corrupt_file_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "test.png", &opaque_rgba(16, 16, 0));
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
        let good = write_png(dir.path(), "icon1.png", &opaque_rgba(4, 4, 0));

        let report = resize_to_reference(
            dir.path(),
            DEFAULT_REFERENCE,
            Filter::Lanczos3,
            &OutputTarget::InPlace,
        )
        .unwrap();

        assert_eq!(report.processed, vec![good.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, dir.path().join("broken.png"));

        let resized = iconbatch_io::read(&good).unwrap();
        assert_eq!((resized.width, resized.height), (16, 16));
    }

    #[test]
    fn test_resize_to_output_dir_keeps_sources() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("resized");
        write_png(dir.path(), "test.png", &opaque_rgba(10, 10, 0));
        write_png(dir.path(), "icon1.png", &opaque_rgba(4, 4, 0));

        resize_to_reference(
            dir.path(),
            DEFAULT_REFERENCE,
            Filter::Bilinear,
            &OutputTarget::Dir(out.clone()),
        )
        .unwrap();

        let source = iconbatch_io::read(dir.path().join("icon1.png")).unwrap();
        assert_eq!((source.width, source.height), (4, 4));

        let copy = iconbatch_io::read(out.join("icon1.png")).unwrap();
        assert_eq!((copy.width, copy.height), (10, 10));
    }

    #[test]
    fn test_copy_alpha_matches_reference_mask() {
        let dir = tempfile::tempdir().unwrap();

        // Reference with an alpha gradient
        let mut reference = opaque_rgba(4, 4, 0);
        for (i, pixel) in reference.data.chunks_exact_mut(4).enumerate() {
            pixel[3] = (i * 16) as u8;
        }
        write_png(dir.path(), "test.png", &reference);

        let icon = write_png(dir.path(), "icon1.png", &opaque_rgba(4, 4, 77));

        let report =
            copy_alpha_from_reference(dir.path(), DEFAULT_REFERENCE, &OutputTarget::InPlace)
                .unwrap();
        assert!(report.is_clean());

        let masked = iconbatch_io::read(&icon).unwrap();
        assert_eq!(masked.channels, 4);
        for (i, pixel) in masked.data.chunks_exact(4).enumerate() {
            assert_eq!(&pixel[..3], &[77, 77, 77], "RGB must be unchanged");
            assert_eq!(pixel[3], (i * 16) as u8, "alpha must match reference");
        }
    }

    #[test]
    fn test_copy_alpha_dimension_mismatch_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "test.png", &opaque_rgba(4, 4, 0));
        let odd = write_png(dir.path(), "odd.png", &opaque_rgba(2, 2, 50));
        let good = write_png(dir.path(), "good.png", &opaque_rgba(4, 4, 50));

        let report =
            copy_alpha_from_reference(dir.path(), DEFAULT_REFERENCE, &OutputTarget::InPlace)
                .unwrap();

        assert_eq!(report.processed, vec![good]);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].1.contains("dimension mismatch"));

        // Skipped file left unmodified
        let untouched = iconbatch_io::read(&odd).unwrap();
        assert_eq!((untouched.width, untouched.height), (2, 2));
        assert_eq!(untouched.pixel(0, 0), &[50, 50, 50, 255]);
    }

    #[test]
    fn test_crop_to_rect_clips_and_preserves_sources() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("crops");
        write_png(dir.path(), "sheet.png", &opaque_rgba(640, 900, 30));

        // The historical icon-sheet band: full width, rows 200..740
        let report = crop_to_rect(dir.path(), &out, Rect::from_ltrb(0, 200, u32::MAX, 740)).unwrap();
        assert!(report.is_clean());

        let cropped = iconbatch_io::read(out.join("sheet.png")).unwrap();
        assert_eq!((cropped.width, cropped.height), (640, 540));

        let source = iconbatch_io::read(dir.path().join("sheet.png")).unwrap();
        assert_eq!((source.width, source.height), (640, 900));
    }

    #[test]
    fn test_trim_crops_to_opaque_bbox() {
        let dir = tempfile::tempdir().unwrap();

        // 8x8 transparent with an opaque 3x2 block at (2,4)
        let mut img = ImageData::new(8, 8, 4);
        for y in 4..6 {
            for x in 2..5 {
                img.data[(y * 8 + x) * 4 + 3] = 255;
            }
        }
        let path = write_png(dir.path(), "icon.png", &img);

        let report = trim_transparent(dir.path(), &OutputTarget::InPlace).unwrap();
        assert!(report.is_clean());

        let trimmed = iconbatch_io::read(&path).unwrap();
        assert_eq!((trimmed.width, trimmed.height), (3, 2));

        // Second run is the identity
        trim_transparent(dir.path(), &OutputTarget::InPlace).unwrap();
        let again = iconbatch_io::read(&path).unwrap();
        assert_eq!((again.width, again.height), (3, 2));
    }

    #[test]
    fn test_trim_fully_transparent_reported_and_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let empty = write_png(dir.path(), "empty.png", &ImageData::new(5, 5, 4));
        let solid = write_png(dir.path(), "solid.png", &opaque_rgba(5, 5, 1));

        let report = trim_transparent(dir.path(), &OutputTarget::InPlace).unwrap();

        assert_eq!(report.processed, vec![solid]);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].1.contains("fully transparent"));

        let untouched = iconbatch_io::read(&empty).unwrap();
        assert_eq!((untouched.width, untouched.height), (5, 5));
    }

    #[test]
    fn test_convert_writes_sibling_png_and_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        let jpg = dir.path().join("photo.JPG");
        let image = ImageData::from_data(6, 6, 3, vec![90; 6 * 6 * 3]).unwrap();
        iconbatch_io::jpeg::write(&jpg, &image, 95).unwrap();

        let report = convert_to_png(dir.path()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.processed, vec![jpg.clone()]);

        assert!(jpg.exists(), "original must be kept");

        // The PNG holds exactly the decoded JPEG pixels.
        let decoded_jpg = iconbatch_io::read(&jpg).unwrap();
        let decoded_png = iconbatch_io::read(dir.path().join("photo.png")).unwrap();
        assert_eq!(decoded_png.data, decoded_jpg.data);
    }

    #[test]
    fn test_convert_ignores_pngs_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "icon.png", &opaque_rgba(2, 2, 0));
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

        let report = convert_to_png(dir.path()).unwrap();
        assert!(report.processed.is_empty());
        assert!(report.failed.is_empty());
    }
}
