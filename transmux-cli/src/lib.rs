//! Command-line interface for the Transmux batch media conversion system.
//!
//! Parses arguments, assembles and validates the core configuration, runs the
//! dependency preflight, and hands the discovered file list to the core
//! dispatcher. All conversion logic lives in `transmux-core`.

pub mod cli;
pub mod terminal;

use transmux_core::{
    find_media_files, process_files, CoreConfig, CoreError, CoreResult, SystemToolchain,
};

use crate::cli::Cli;

/// Builds the core configuration from parsed arguments.
pub fn build_config(args: Cli) -> CoreConfig {
    CoreConfig {
        input_path: args.path,
        output_dir: args.output_dir,
        mode: args.mode,
        codec: args.codec,
        quality: args.quality,
        force: args.force,
        verbose: args.verbose,
        dry_run: args.dry_run,
        workers: args.workers.max(1),
    }
}

/// Runs one conversion pass end to end.
///
/// A run with per-file failures still returns `Ok`: failures are reported in
/// the summary and the remaining queue is always drained. Only setup problems
/// (missing tools, invalid configuration, inaccessible input) are errors.
pub fn run(args: Cli) -> CoreResult<()> {
    transmux_core::check_dependencies()?;

    let config = build_config(args);
    config.validate()?;
    log::debug!("run configuration: {config:?}");

    terminal::print_header(&config);

    let files = match find_media_files(&config.input_path) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            terminal::print_warning("no media files found");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let toolchain = SystemToolchain::new(config.verbose);
    let summary = process_files(&toolchain, &config, &files)?;

    terminal::print_summary(&summary);
    Ok(())
}
