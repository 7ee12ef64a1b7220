//! iconbatch - batch icon image processing CLI
//!
//! Resize, crop, trim, alpha-copy and convert PNG/JPEG icons in a directory.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use iconbatch_core::Rect;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "iconbatch")]
#[command(author, version, about = "Batch icon image processing CLI")]
#[command(long_about = "
Batch-process PNG/JPEG icon images in a directory. Each command takes a
single pass over the directory; per-file failures are reported and the
rest of the batch still runs.

Examples:
  iconbatch resize icons/ --in-place            # Match every PNG to test.png's size
  iconbatch resize icons/ -r base.png -o out/
  iconbatch alpha icons/ --in-place             # Copy test.png's alpha onto every PNG
  iconbatch crop sheets/ --rect 0,200,max,740   # Cut the icon band into ../crops
  iconbatch trim icons/ --in-place              # Trim transparent borders
  iconbatch convert icons/                      # Re-encode .jpg/.jpeg as .png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize every PNG to the reference image's dimensions
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Copy the reference image's alpha channel onto every PNG
    #[command(visible_alias = "a")]
    Alpha(AlphaArgs),

    /// Crop a fixed rectangle out of every PNG into an output directory
    Crop(CropArgs),

    /// Trim fully transparent borders from every PNG
    Trim(TrimArgs),

    /// Re-encode every .jpg/.jpeg as a sibling .png
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

#[derive(Args)]
struct ResizeArgs {
    /// Directory containing the PNG batch
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Reference image filename inside the directory
    #[arg(short, long, default_value = "test.png")]
    reference: String,

    /// Filter: nearest, bilinear, bicubic, lanczos
    #[arg(short, long, default_value = "lanczos")]
    filter: String,

    /// Overwrite source files
    #[arg(long, conflicts_with = "output_dir", required_unless_present = "output_dir")]
    in_place: bool,

    /// Write results into this directory instead of overwriting
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct AlphaArgs {
    /// Directory containing the PNG batch
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Reference image filename inside the directory
    #[arg(short, long, default_value = "test.png")]
    reference: String,

    /// Overwrite source files
    #[arg(long, conflicts_with = "output_dir", required_unless_present = "output_dir")]
    in_place: bool,

    /// Write results into this directory instead of overwriting
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct CropArgs {
    /// Directory containing the PNG batch
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Crop rectangle as left,top,right,bottom in pixels, clipped to each
    /// image; "max" is accepted for right/bottom
    #[arg(long, value_name = "L,T,R,B", value_parser = commands::parse_rect)]
    rect: Rect,

    /// Output directory, created if absent (default: ../crops next to the
    /// source directory); sources are never overwritten
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct TrimArgs {
    /// Directory containing the PNG batch
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Overwrite source files
    #[arg(long, conflicts_with = "output_dir", required_unless_present = "output_dir")]
    in_place: bool,

    /// Write results into this directory instead of overwriting
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Directory containing the JPEG files
    #[arg(default_value = ".")]
    directory: PathBuf,
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resize(args) => commands::resize::run(args, cli.verbose),
        Commands::Alpha(args) => commands::alpha::run(args, cli.verbose),
        Commands::Crop(args) => commands::crop::run(args, cli.verbose),
        Commands::Trim(args) => commands::trim::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
    }
}
