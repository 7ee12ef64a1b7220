//! Copy-alpha-from-reference command

use crate::AlphaArgs;
use anyhow::{Context, Result};
use iconbatch_ops::batch;
use tracing::info;

pub fn run(args: AlphaArgs, verbose: bool) -> Result<()> {
    let target = super::output_target(args.in_place, args.output_dir);

    info!(directory = %args.directory.display(), reference = %args.reference, "alpha batch");
    if verbose {
        println!(
            "Applying {}'s alpha channel to PNGs in {}",
            args.reference,
            args.directory.display()
        );
    }

    let report = batch::copy_alpha_from_reference(&args.directory, &args.reference, &target)
        .with_context(|| {
            format!(
                "alpha batch in {} aborted (is the reference '{}' readable?)",
                args.directory.display(),
                args.reference
            )
        })?;

    super::finish(&report)
}
