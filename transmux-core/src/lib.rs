//! Core library for batch media conversion using ffmpeg and ffprobe.
//!
//! This crate decides, per media file, whether it already satisfies a target
//! delivery format or needs rewrapping/transcoding, and dispatches that work
//! across a bounded pool of concurrent workers. It provides file discovery,
//! stream probing, conversion classification, ffmpeg command construction,
//! and aggregate run statistics.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use transmux_core::{
//!     CoreConfig, ConversionMode, EditingCodec, SystemToolchain,
//!     find_media_files, process_files,
//! };
//!
//! let config = CoreConfig {
//!     input_path: PathBuf::from("/media/footage"),
//!     output_dir: None,
//!     mode: ConversionMode::Editing,
//!     codec: EditingCodec::DnxHr,
//!     quality: "hq".to_string(),
//!     force: false,
//!     verbose: false,
//!     dry_run: false,
//!     workers: 4,
//! };
//! config.validate().unwrap();
//!
//! let files = find_media_files(&config.input_path).unwrap();
//! let toolchain = SystemToolchain::new(config.verbose);
//! let summary = process_files(&toolchain, &config, &files).unwrap();
//! println!("converted {} of {} files", summary.succeeded, summary.total);
//! ```

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod processing;

// Re-exports for the public API
pub use analysis::{classify, Action};
pub use config::{
    ConversionMode, CoreConfig, DnxhrTier, EditingCodec, ProresTier, TargetProfile,
};
pub use discovery::find_media_files;
pub use error::{CoreError, CoreResult};
pub use external::{
    build_ffmpeg_args, check_dependencies, ffprobe_args, FfprobeOutput, StreamInfo, StreamKind,
    SystemToolchain, Toolchain,
};
pub use processing::{output_path, process_files, JobResult, Stats, StatsSnapshot};
