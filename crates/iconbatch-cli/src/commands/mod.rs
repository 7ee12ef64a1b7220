//! CLI command implementations

pub mod alpha;
pub mod convert;
pub mod crop;
pub mod resize;
pub mod trim;

use anyhow::{Result, bail};
use iconbatch_core::Rect;
use iconbatch_ops::batch::{BatchReport, OutputTarget};
use std::path::PathBuf;

/// Maps the in-place/output-dir argument pair to an output target.
///
/// clap guarantees exactly one of the two was given.
pub fn output_target(in_place: bool, output_dir: Option<PathBuf>) -> OutputTarget {
    debug_assert!(in_place || output_dir.is_some());
    match output_dir {
        Some(dir) => OutputTarget::Dir(dir),
        None => OutputTarget::InPlace,
    }
}

/// Parses a crop rectangle given as `left,top,right,bottom`.
///
/// `right` and `bottom` accept `max` to run to the image edge.
pub fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err("expected left,top,right,bottom".to_string());
    }

    let mut edges = [0u32; 4];
    for (i, part) in parts.iter().enumerate() {
        edges[i] = if i >= 2 && part.eq_ignore_ascii_case("max") {
            u32::MAX
        } else {
            part.parse()
                .map_err(|e| format!("invalid edge '{}': {}", part, e))?
        };
    }

    let rect = Rect::from_ltrb(edges[0], edges[1], edges[2], edges[3]);
    if rect.is_empty() {
        return Err("rectangle is empty".to_string());
    }
    Ok(rect)
}

/// Prints per-file lines and the batch summary, then fails the process
/// if any file was skipped.
pub fn finish(report: &BatchReport) -> Result<()> {
    for path in &report.processed {
        println!("Processed: {}", path.display());
    }
    for (path, error) in &report.failed {
        eprintln!("Failed: {}: {}", path.display(), error);
    }
    println!(
        "Processed: {} success, {} failed",
        report.processed.len(),
        report.failed.len()
    );

    if !report.is_clean() {
        bail!("{} files failed", report.failed.len());
    }
    Ok(())
}
