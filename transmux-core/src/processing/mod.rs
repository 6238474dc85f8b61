//! Job dispatch and the concurrent worker pool.
//!
//! [`process_files`] fills one shared queue with every discovered file, then
//! drains it with a fixed pool of peer workers. Each worker runs the same
//! per-file pipeline (pre-checks, probe, classify, convert) and folds its
//! outcome into the shared [`Stats`] record. Per-file errors are caught at
//! the worker boundary; one failing file never stops the rest of the queue.

pub mod stats;

pub use stats::{JobResult, Stats, StatsSnapshot};

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::analysis::{classify, Action};
use crate::config::{CoreConfig, TargetProfile};
use crate::error::{CoreError, CoreResult};
use crate::external::{build_ffmpeg_args, Toolchain};

/// Processes every file in `files` against the configured target, returning
/// the final statistics after all workers have joined.
///
/// The queue is filled completely and closed before the workers start, so
/// each worker terminates deterministically when the queue runs dry. Workers
/// complete jobs in no particular order; the snapshot read happens-after the
/// pool join and therefore observes every outcome.
pub fn process_files(
    toolchain: &dyn Toolchain,
    config: &CoreConfig,
    files: &[PathBuf],
) -> CoreResult<StatsSnapshot> {
    let target = config.target_profile()?;
    let stats = Stats::new(files.len());

    if files.is_empty() {
        return Ok(stats.snapshot());
    }

    let (sender, receiver) = mpsc::channel::<PathBuf>();
    for file in files {
        // Send cannot fail while the receiver is alive in this scope.
        let _ = sender.send(file.clone());
    }
    drop(sender);
    let queue = Arc::new(Mutex::new(receiver));

    let workers = config.workers.min(files.len()).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| CoreError::OperationFailed(format!("failed to build worker pool: {e}")))?;

    log::info!("starting {workers} worker(s) over {} file(s)", files.len());

    pool.scope(|scope| {
        for _ in 0..workers {
            let queue = Arc::clone(&queue);
            let stats = &stats;
            scope.spawn(move |_| {
                loop {
                    // Take the next file in its own statement so the queue
                    // lock is released before any processing starts. The
                    // queue is pre-filled and closed, so Empty and
                    // Disconnected both mean the worker is done.
                    let next = queue.lock().unwrap().try_recv();
                    let Ok(file) = next else {
                        break;
                    };
                    let result = process_file(toolchain, config, &target, &file);
                    report(&file, &result);
                    stats.record(&result);
                }
            });
        }
    });

    Ok(stats.snapshot())
}

/// Computes the output path for one source file: configured output directory
/// (or the source's own directory), source stem, and the target's fixed
/// suffix and container extension.
pub fn output_path(source: &Path, config: &CoreConfig, target: &TargetProfile) -> PathBuf {
    let dir = match (&config.output_dir, source.parent()) {
        (Some(dir), _) => dir.clone(),
        (None, Some(parent)) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        (None, _) => PathBuf::from("."),
    };

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    dir.join(format!(
        "{stem}{}.{}",
        target.output_suffix(),
        target.container_ext()
    ))
}

/// Runs the per-file pipeline, converting any error into a `Failed` outcome.
fn process_file(
    toolchain: &dyn Toolchain,
    config: &CoreConfig,
    target: &TargetProfile,
    file: &Path,
) -> JobResult {
    match try_process(toolchain, config, target, file) {
        Ok(result) => result,
        Err(e) => JobResult::Failed(e.to_string()),
    }
}

fn try_process(
    toolchain: &dyn Toolchain,
    config: &CoreConfig,
    target: &TargetProfile,
    file: &Path,
) -> CoreResult<JobResult> {
    let output = output_path(file, config, target);

    // Destination conflict is a configuration problem, checked before any
    // external invocation or directory creation is attempted.
    if !config.force && output.exists() {
        return Err(CoreError::DestinationExists(output));
    }

    let probe = toolchain.probe(file)?;
    let action = classify(file, &probe, target);

    match action {
        Action::Unsupported => return Err(CoreError::NoVideoStream),
        Action::Skip => return Ok(JobResult::Skipped),
        _ => {}
    }

    if config.dry_run {
        log::info!("dry run: would {action:?} {}", file.display());
        return Ok(JobResult::Succeeded(action));
    }

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CoreError::DirectoryCreation(parent.to_path_buf(), e))?;
    }

    let args = build_ffmpeg_args(file, &output, action, target);
    if let Err(e) = toolchain.execute_ffmpeg(&args) {
        // Best-effort cleanup so a failed run never leaves a truncated file
        // that a later run would mistake for a finished output.
        let _ = std::fs::remove_file(&output);
        return Err(e);
    }

    Ok(JobResult::Succeeded(action))
}

fn report(file: &Path, result: &JobResult) {
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    match result {
        JobResult::Succeeded(Action::Rewrap) => log::info!("rewrapped: {name}"),
        JobResult::Succeeded(action) => log::info!("processed: {name} ({action:?})"),
        JobResult::Skipped => log::info!("skipped: {name} (already compatible)"),
        JobResult::Failed(reason) => log::error!("{name}: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConversionMode, DnxhrTier, EditingCodec};

    fn editing_config() -> CoreConfig {
        CoreConfig {
            input_path: PathBuf::from("in"),
            output_dir: None,
            mode: ConversionMode::Editing,
            codec: EditingCodec::DnxHr,
            quality: "hq".to_string(),
            force: false,
            verbose: false,
            dry_run: false,
            workers: 2,
        }
    }

    #[test]
    fn output_lands_next_to_source_by_default() {
        let config = editing_config();
        let target = TargetProfile::Dnxhr(DnxhrTier::Hq);
        let out = output_path(Path::new("/media/raw/clip.mkv"), &config, &target);
        assert_eq!(out, PathBuf::from("/media/raw/clip_converted.mov"));
    }

    #[test]
    fn output_dir_override_redirects_output() {
        let mut config = editing_config();
        config.output_dir = Some(PathBuf::from("/out"));
        let target = TargetProfile::Prores(crate::config::ProresTier::Hq);
        let out = output_path(Path::new("/media/raw/clip.avi"), &config, &target);
        assert_eq!(out, PathBuf::from("/out/clip_converted.mov"));
    }

    #[test]
    fn export_target_uses_mp4_and_export_suffix() {
        let config = editing_config();
        let out = output_path(Path::new("clip.mkv"), &config, &TargetProfile::H264);
        assert_eq!(out, PathBuf::from("./clip_export.mp4"));
    }
}
