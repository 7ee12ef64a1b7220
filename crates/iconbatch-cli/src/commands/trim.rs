//! Trim-transparent-borders command

use crate::TrimArgs;
use anyhow::{Context, Result};
use iconbatch_ops::batch;
use tracing::info;

pub fn run(args: TrimArgs, verbose: bool) -> Result<()> {
    let target = super::output_target(args.in_place, args.output_dir);

    info!(directory = %args.directory.display(), "trim batch");
    if verbose {
        println!(
            "Trimming transparent borders from PNGs in {}",
            args.directory.display()
        );
    }

    let report = batch::trim_transparent(&args.directory, &target).with_context(|| {
        format!("trim batch in {} aborted", args.directory.display())
    })?;

    super::finish(&report)
}
