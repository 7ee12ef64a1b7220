//! JPEG-to-PNG conversion command

use crate::ConvertArgs;
use anyhow::{Context, Result};
use iconbatch_ops::batch;
use tracing::info;

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    info!(directory = %args.directory.display(), "convert batch");
    if verbose {
        println!(
            "Re-encoding .jpg/.jpeg files in {} as .png",
            args.directory.display()
        );
    }

    let report = batch::convert_to_png(&args.directory).with_context(|| {
        format!("convert batch in {} aborted", args.directory.display())
    })?;

    super::finish(&report)
}
