//! Crop-to-rect command

use crate::CropArgs;
use anyhow::{Context, Result};
use iconbatch_ops::batch;
use tracing::info;

pub fn run(args: CropArgs, verbose: bool) -> Result<()> {
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| args.directory.join("../crops"));

    info!(directory = %args.directory.display(), output = %output_dir.display(), "crop batch");
    if verbose {
        println!(
            "Cropping PNGs in {} to {}x{}+{}+{} into {}",
            args.directory.display(),
            args.rect.width,
            args.rect.height,
            args.rect.x,
            args.rect.y,
            output_dir.display()
        );
    }

    let report = batch::crop_to_rect(&args.directory, &output_dir, args.rect).with_context(|| {
        format!("crop batch in {} aborted", args.directory.display())
    })?;

    super::finish(&report)
}
