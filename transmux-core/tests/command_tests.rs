// transmux-core/tests/command_tests.rs
//
// Pins the ffmpeg argument grammar: these argument lists are the wire
// protocol to the external tool.

use std::path::Path;

use transmux_core::{build_ffmpeg_args, Action, DnxhrTier, ProresTier, TargetProfile};

fn build(action: Action, target: TargetProfile) -> Vec<String> {
    build_ffmpeg_args(
        Path::new("/in/clip.mkv"),
        Path::new("/out/clip_converted.mov"),
        action,
        &target,
    )
}

fn contains_pair(args: &[String], flag: &str, value: &str) -> bool {
    args.windows(2)
        .any(|pair| pair[0] == flag && pair[1] == value)
}

#[test]
fn rewrap_copies_streams_without_re_encoding() {
    let args = build(Action::Rewrap, TargetProfile::Dnxhr(DnxhrTier::Hq));
    assert_eq!(
        args,
        [
            "-y",
            "-i",
            "/in/clip.mkv",
            "-c",
            "copy",
            "-map_metadata",
            "0",
            "/out/clip_converted.mov"
        ]
    );
    // No per-stream encoder selection of any kind.
    assert!(!args.iter().any(|a| a == "-c:v" || a == "-c:a"));
}

#[test]
fn convert_audio_copies_video_verbatim() {
    let args = build(Action::ConvertAudio, TargetProfile::Dnxhr(DnxhrTier::Hq));
    assert!(contains_pair(&args, "-c:v", "copy"));
    assert!(contains_pair(&args, "-c:a", "pcm_s16le"));
    assert!(!args.iter().any(|a| a == "dnxhd"));
}

#[test]
fn convert_video_copies_audio_verbatim() {
    let args = build(Action::ConvertVideo, TargetProfile::Dnxhr(DnxhrTier::Hq));
    assert!(contains_pair(&args, "-c:v", "dnxhd"));
    assert!(contains_pair(&args, "-profile:v", "dnxhr_hq"));
    assert!(contains_pair(&args, "-pix_fmt", "yuv422p"));
    assert!(contains_pair(&args, "-c:a", "copy"));
    assert!(!args.iter().any(|a| a == "pcm_s16le"));
}

#[test]
fn full_convert_selects_both_encoders() {
    let args = build(Action::FullConvert, TargetProfile::Dnxhr(DnxhrTier::Hqx));
    assert!(contains_pair(&args, "-c:v", "dnxhd"));
    assert!(contains_pair(&args, "-profile:v", "dnxhr_hqx"));
    assert!(contains_pair(&args, "-c:a", "pcm_s16le"));
}

#[test]
fn video_re_encode_forces_even_dimensions() {
    for action in [Action::ConvertVideo, Action::FullConvert] {
        let args = build(action, TargetProfile::H264);
        assert!(contains_pair(
            &args,
            "-vf",
            "scale=trunc(iw/2)*2:trunc(ih/2)*2"
        ));
    }
    // Stream copies never filter.
    let rewrap = build(Action::Rewrap, TargetProfile::H264);
    assert!(!rewrap.iter().any(|a| a == "-vf"));
    let audio_only = build(Action::ConvertAudio, TargetProfile::H264);
    assert!(!audio_only.iter().any(|a| a == "-vf"));
}

#[test]
fn non_rewrap_actions_map_streams_and_metadata() {
    for action in [Action::ConvertAudio, Action::ConvertVideo, Action::FullConvert] {
        let args = build(action, TargetProfile::Prores(ProresTier::Lt));
        assert!(contains_pair(&args, "-map", "0:v:0"));
        assert!(contains_pair(&args, "-map", "0:a?"));
        assert!(contains_pair(&args, "-map_metadata", "0"));
        assert!(contains_pair(&args, "-movflags", "+faststart"));
    }
}

#[test]
fn prores_grammar_matches_encoder_expectations() {
    let args = build(Action::FullConvert, TargetProfile::Prores(ProresTier::Hq));
    assert!(contains_pair(&args, "-c:v", "prores_ks"));
    assert!(contains_pair(&args, "-profile:v", "3"));
    assert!(contains_pair(&args, "-vendor", "ap10"));
    assert!(contains_pair(&args, "-pix_fmt", "yuv422p10le"));
}

#[test]
fn export_grammar_matches_delivery_expectations() {
    let args = build(Action::FullConvert, TargetProfile::H264);
    assert!(contains_pair(&args, "-c:v", "libx264"));
    assert!(contains_pair(&args, "-preset", "slow"));
    assert!(contains_pair(&args, "-crf", "18"));
    assert!(contains_pair(&args, "-pix_fmt", "yuv420p"));
    assert!(contains_pair(&args, "-c:a", "aac"));
    assert!(contains_pair(&args, "-b:a", "320k"));
}

#[test]
fn every_invocation_overwrites_and_ends_with_output() {
    for action in [
        Action::Rewrap,
        Action::ConvertAudio,
        Action::ConvertVideo,
        Action::FullConvert,
    ] {
        let args = build(action, TargetProfile::Dnxhr(DnxhrTier::Sq));
        assert_eq!(args[0], "-y");
        assert_eq!(args[1], "-i");
        assert_eq!(args[2], "/in/clip.mkv");
        assert_eq!(args.last().unwrap(), "/out/clip_converted.mov");
    }
}
