// transmux-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

use transmux_core::{ConversionMode, EditingCodec};

/// Batch media converter for editing intermediates and delivery exports.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "transmux",
    author,
    version,
    about = "Transmux: batch media conversion for editing and delivery",
    long_about = "Converts media files to DNxHR/ProRes intermediates for editing, \
or exports finished videos to H.264 for universal playback. Files already in \
the target format are skipped or cheaply rewrapped."
)]
pub struct Cli {
    /// Input file or directory to process
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output directory for converted files (defaults to each source's directory)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Conversion mode: 'editing' or 'export'
    #[arg(long, default_value = "editing", value_name = "MODE")]
    pub mode: ConversionMode,

    /// Codec for editing mode: 'dnxhr' or 'prores'
    #[arg(long, default_value = "dnxhr", value_name = "CODEC")]
    pub codec: EditingCodec,

    /// Quality tier: 'lb', 'sq', 'hq', 'hqx', '444' (DNxHR) or
    /// 'proxy', 'lt', 'standard', 'hq' (ProRes)
    #[arg(long, default_value = "hq", value_name = "QUALITY")]
    pub quality: String,

    /// Show ffmpeg's own output instead of silencing it
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite existing output files instead of failing
    #[arg(short, long)]
    pub force: bool,

    /// Number of parallel conversion workers
    #[arg(short, long, default_value_t = num_cpus::get(), value_name = "N")]
    pub workers: usize,

    /// Analyze and report without converting anything
    #[arg(long)]
    pub dry_run: bool,
}
