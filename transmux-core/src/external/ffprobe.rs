//! ffprobe argument construction and output parsing.
//!
//! The probe invocation asks ffprobe for a JSON stream listing and parses the
//! subset of it the classifier needs: codec name and stream type per stream.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Stream type as reported by ffprobe's `codec_type` field.
///
/// ffprobe emits arbitrary strings here (`subtitle`, `data`, `attachment`);
/// everything that is not video or audio collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    #[serde(other)]
    Other,
}

impl Default for StreamKind {
    fn default() -> Self {
        Self::Other
    }
}

/// One elementary stream from the probe report.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamInfo {
    #[serde(default)]
    pub codec_name: String,
    #[serde(default)]
    pub codec_type: StreamKind,
}

/// Parsed ffprobe report for one file: the ordered stream list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FfprobeOutput {
    #[serde(default)]
    pub streams: Vec<StreamInfo>,
}

/// The exact argument list passed to ffprobe, excluding the program name.
pub fn ffprobe_args(input: &Path) -> Vec<String> {
    vec![
        "-v".to_string(),
        "quiet".to_string(),
        "-print_format".to_string(),
        "json".to_string(),
        "-show_streams".to_string(),
        input.to_string_lossy().into_owned(),
    ]
}

/// Parses raw ffprobe stdout into a stream report.
pub fn parse_ffprobe_output(stdout: &[u8]) -> CoreResult<FfprobeOutput> {
    serde_json::from_slice(stdout).map_err(|e| CoreError::FfprobeParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn ffprobe_args_match_tool_grammar() {
        let args = ffprobe_args(&PathBuf::from("/media/clip.mkv"));
        assert_eq!(
            args,
            [
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_streams",
                "/media/clip.mkv"
            ]
        );
    }

    #[test]
    fn parses_stream_listing() {
        let json = br#"{"streams":[
            {"codec_name":"dnxhd","codec_type":"video"},
            {"codec_name":"pcm_s16le","codec_type":"audio"},
            {"codec_name":"mov_text","codec_type":"subtitle"}
        ]}"#;
        let probe = parse_ffprobe_output(json).unwrap();
        assert_eq!(probe.streams.len(), 3);
        assert_eq!(probe.streams[0].codec_type, StreamKind::Video);
        assert_eq!(probe.streams[1].codec_name, "pcm_s16le");
        assert_eq!(probe.streams[2].codec_type, StreamKind::Other);
    }

    #[test]
    fn tolerates_missing_fields() {
        let probe = parse_ffprobe_output(br#"{"streams":[{}]}"#).unwrap();
        assert_eq!(probe.streams[0].codec_name, "");
        assert_eq!(probe.streams[0].codec_type, StreamKind::Other);

        let empty = parse_ffprobe_output(b"{}").unwrap();
        assert!(empty.streams.is_empty());
    }

    #[test]
    fn rejects_malformed_output() {
        assert!(matches!(
            parse_ffprobe_output(b"not json"),
            Err(CoreError::FfprobeParse(_))
        ));
    }
}
