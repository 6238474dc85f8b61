//! Interactions with the external ffmpeg and ffprobe tools.
//!
//! All process invocations go through the [`Toolchain`] trait so the
//! dispatcher can be exercised in tests without ffmpeg installed. The default
//! implementation, [`SystemToolchain`], runs the tools synchronously via
//! `std::process::Command`; both invocations are blocking from the calling
//! worker's perspective.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

pub mod ffmpeg;
pub mod ffprobe;

pub use ffmpeg::build_ffmpeg_args;
pub use ffprobe::{ffprobe_args, parse_ffprobe_output, FfprobeOutput, StreamInfo, StreamKind};

/// Abstraction over the external media toolchain.
///
/// `probe` inspects a file and must not mutate it; `execute_ffmpeg` runs one
/// conversion described entirely by its argument list. Implementations must
/// be shareable across the worker pool.
pub trait Toolchain: Send + Sync {
    /// Probes one file for its stream layout.
    fn probe(&self, input: &Path) -> CoreResult<FfprobeOutput>;

    /// Runs ffmpeg with the given argument list, waiting for completion.
    fn execute_ffmpeg(&self, args: &[String]) -> CoreResult<()>;
}

/// [`Toolchain`] implementation invoking the real ffmpeg/ffprobe binaries.
pub struct SystemToolchain {
    verbose: bool,
}

impl SystemToolchain {
    /// When `verbose` is set, ffmpeg inherits the parent's stdio instead of
    /// having its output discarded.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Toolchain for SystemToolchain {
    fn probe(&self, input: &Path) -> CoreResult<FfprobeOutput> {
        log::debug!("probing: {}", input.display());

        let output = Command::new("ffprobe")
            .args(ffprobe_args(input))
            .stderr(Stdio::null())
            .output()
            .map_err(|e| CoreError::CommandStart("ffprobe".to_string(), e))?;

        if !output.status.success() {
            return Err(CoreError::CommandFailed(
                "ffprobe".to_string(),
                output.status,
            ));
        }

        parse_ffprobe_output(&output.stdout)
    }

    fn execute_ffmpeg(&self, args: &[String]) -> CoreResult<()> {
        log::debug!("running ffmpeg {}", args.join(" "));

        let mut cmd = Command::new("ffmpeg");
        cmd.args(args);

        if !self.verbose {
            cmd.stdout(Stdio::null());
            cmd.stderr(Stdio::null());
        }

        let status = cmd
            .status()
            .map_err(|e| CoreError::CommandStart("ffmpeg".to_string(), e))?;

        if !status.success() {
            return Err(CoreError::CommandFailed("ffmpeg".to_string(), status));
        }

        Ok(())
    }
}

/// Checks that a required external command is available and executable.
fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => Err(CoreError::CommandStart(cmd_name.to_string(), e)),
    }
}

/// Verifies that ffmpeg and ffprobe are installed.
///
/// This is the only process-fatal check; it runs once before any work begins.
pub fn check_dependencies() -> CoreResult<()> {
    for tool in ["ffmpeg", "ffprobe"] {
        check_dependency(tool)?;
    }
    Ok(())
}
