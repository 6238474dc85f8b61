//! ffmpeg command construction.
//!
//! [`build_ffmpeg_args`] maps a classified action and target profile to the
//! exact ffmpeg argument list, with no side effects. The argument grammar is
//! the wire protocol to the external tool and is pinned by the command tests.

use std::path::Path;

use crate::analysis::Action;
use crate::config::TargetProfile;

/// Scale filter forcing even output dimensions; DNxHD and most H.264
/// pixel formats reject odd frame sizes.
const EVEN_SCALE_FILTER: &str = "scale=trunc(iw/2)*2:trunc(ih/2)*2";

/// Builds the ffmpeg argument list (excluding the program name) for one job.
///
/// `Skip` and `Unsupported` never reach conversion; the dispatcher
/// short-circuits them before the builder is consulted.
pub fn build_ffmpeg_args(
    source: &Path,
    output: &Path,
    action: Action,
    target: &TargetProfile,
) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-y".to_string(),
        "-i".to_string(),
        source.to_string_lossy().into_owned(),
    ];

    match action {
        Action::Rewrap => {
            // Copy every stream and the global metadata into the new container.
            push_all(&mut args, &["-c", "copy", "-map_metadata", "0"]);
        }
        Action::ConvertAudio => {
            push_stream_selection(&mut args);
            push_all(&mut args, &["-c:v", "copy"]);
            push_audio_encoder(&mut args, target);
            push_all(&mut args, &["-movflags", "+faststart"]);
        }
        Action::ConvertVideo => {
            push_stream_selection(&mut args);
            push_video_encoder(&mut args, target);
            push_all(&mut args, &["-c:a", "copy"]);
            push_all(&mut args, &["-movflags", "+faststart"]);
        }
        Action::FullConvert => {
            push_stream_selection(&mut args);
            push_video_encoder(&mut args, target);
            push_audio_encoder(&mut args, target);
            push_all(&mut args, &["-movflags", "+faststart"]);
        }
        Action::Skip | Action::Unsupported => {
            unreachable!("{action:?} must not reach the command builder")
        }
    }

    args.push(output.to_string_lossy().into_owned());
    args
}

/// First video stream, optional audio, global metadata.
fn push_stream_selection(args: &mut Vec<String>) {
    push_all(args, &["-map", "0:v:0", "-map", "0:a?", "-map_metadata", "0"]);
}

fn push_video_encoder(args: &mut Vec<String>, target: &TargetProfile) {
    match target {
        TargetProfile::Dnxhr(tier) => {
            push_all(args, &["-c:v", "dnxhd", "-profile:v"]);
            args.push(tier.encoder_profile().to_string());
            push_all(args, &["-pix_fmt", "yuv422p"]);
        }
        TargetProfile::Prores(tier) => {
            push_all(args, &["-c:v", "prores_ks", "-profile:v"]);
            args.push(tier.encoder_profile().to_string());
            push_all(args, &["-vendor", "ap10", "-pix_fmt", "yuv422p10le"]);
        }
        TargetProfile::H264 => {
            push_all(
                args,
                &["-c:v", "libx264", "-preset", "slow", "-crf", "18", "-pix_fmt", "yuv420p"],
            );
        }
    }
    push_all(args, &["-vf", EVEN_SCALE_FILTER]);
}

fn push_audio_encoder(args: &mut Vec<String>, target: &TargetProfile) {
    match target {
        TargetProfile::Dnxhr(_) | TargetProfile::Prores(_) => {
            push_all(args, &["-c:a", "pcm_s16le"]);
        }
        TargetProfile::H264 => {
            push_all(args, &["-c:a", "aac", "-b:a", "320k"]);
        }
    }
}

fn push_all(args: &mut Vec<String>, extra: &[&str]) {
    args.extend(extra.iter().map(|s| s.to_string()));
}
