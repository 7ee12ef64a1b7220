//! Resize-to-reference command

use crate::ResizeArgs;
use anyhow::{Context, Result};
use iconbatch_ops::batch;
use iconbatch_ops::resize::Filter;
use tracing::info;

pub fn run(args: ResizeArgs, verbose: bool) -> Result<()> {
    let filter: Filter = args.filter.parse()?;
    let target = super::output_target(args.in_place, args.output_dir);

    info!(directory = %args.directory.display(), reference = %args.reference, "resize batch");
    if verbose {
        println!(
            "Resizing PNGs in {} to match {} ({:?} filter)",
            args.directory.display(),
            args.reference,
            filter
        );
    }

    let report = batch::resize_to_reference(&args.directory, &args.reference, filter, &target)
        .with_context(|| {
            format!(
                "resize batch in {} aborted (is the reference '{}' readable?)",
                args.directory.display(),
                args.reference
            )
        })?;

    super::finish(&report)
}
