//! Conversion classification.
//!
//! [`classify`] is the decision engine of the pipeline: a pure function from
//! probed stream metadata and the delivery target to the action required to
//! bring a file into that target format. It performs no I/O and is called
//! exactly once per file, between the probe and the dispatch decision.

use std::path::Path;

use crate::config::TargetProfile;
use crate::external::ffprobe::{FfprobeOutput, StreamKind};

/// What needs to happen to a file to satisfy the delivery target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Already matches codecs and container; nothing to do.
    Skip,
    /// Streams match but the container does not; repackage without re-encoding.
    Rewrap,
    /// Video matches; only the audio stream needs re-encoding.
    ConvertAudio,
    /// Audio is acceptable; only the video stream needs re-encoding.
    ConvertVideo,
    /// Both streams need re-encoding.
    FullConvert,
    /// No video stream; the file cannot be converted.
    Unsupported,
}

/// Classifies a probed file against the delivery target.
///
/// The full stream list is scanned rather than assuming stream 0 is video;
/// ffprobe reports streams in container order, which frequently puts audio or
/// data tracks first. Files without any audio stream are treated as having
/// acceptable audio, since there is nothing to re-encode.
///
/// The container extension only distinguishes `Skip` from `Rewrap`: once
/// either stream needs re-encoding the output is written into the target
/// container anyway, so a container mismatch adds no extra work.
pub fn classify(source: &Path, probe: &FfprobeOutput, target: &TargetProfile) -> Action {
    let video = probe
        .streams
        .iter()
        .find(|s| s.codec_type == StreamKind::Video);

    let Some(video) = video else {
        return Action::Unsupported;
    };

    let audio = probe
        .streams
        .iter()
        .find(|s| s.codec_type == StreamKind::Audio);

    let video_match = video.codec_name == target.video_codec();
    let audio_match = match audio {
        None => true,
        Some(stream) => target
            .acceptable_audio_codecs()
            .contains(&stream.codec_name.as_str()),
    };
    let container_match = source
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(target.container_ext()));

    match (video_match, audio_match) {
        (true, true) if container_match => Action::Skip,
        (true, true) => Action::Rewrap,
        (true, false) => Action::ConvertAudio,
        (false, true) => Action::ConvertVideo,
        (false, false) => Action::FullConvert,
    }
}
