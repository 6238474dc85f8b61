//! Configuration structures and target profile resolution.
//!
//! A [`CoreConfig`] is assembled by the consumer (transmux-cli) and validated
//! once before any file is touched. Validation resolves the mode/codec/quality
//! selection into a [`TargetProfile`], so an invalid quality tier is rejected
//! up front rather than discovered mid-run as an empty encoder profile.
//! The config is immutable for the duration of a run and shared by all
//! workers without synchronization.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// High-level conversion mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Convert to an intermediate codec (DNxHR/ProRes) for editing.
    Editing,
    /// Export to H.264/AAC for universal playback.
    Export,
}

impl FromStr for ConversionMode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "editing" | "edit" => Ok(Self::Editing),
            "export" => Ok(Self::Export),
            _ => Err(CoreError::InvalidConfig(format!(
                "invalid mode '{s}' (use 'editing' or 'export')"
            ))),
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Editing => write!(f, "editing"),
            Self::Export => write!(f, "export"),
        }
    }
}

/// Intermediate codec family used in editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingCodec {
    DnxHr,
    ProRes,
}

impl FromStr for EditingCodec {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "dnxhr" | "dnxhd" => Ok(Self::DnxHr),
            "prores" => Ok(Self::ProRes),
            _ => Err(CoreError::InvalidConfig(format!(
                "invalid codec '{s}' (use 'dnxhr' or 'prores')"
            ))),
        }
    }
}

impl fmt::Display for EditingCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DnxHr => write!(f, "DNxHR"),
            Self::ProRes => write!(f, "ProRes"),
        }
    }
}

/// DNxHR quality tier, mapped to an ffmpeg `-profile:v` identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnxhrTier {
    Lb,
    Sq,
    Hq,
    Hqx,
    FourFourFour,
}

impl DnxhrTier {
    pub fn encoder_profile(self) -> &'static str {
        match self {
            Self::Lb => "dnxhr_lb",
            Self::Sq => "dnxhr_sq",
            Self::Hq => "dnxhr_hq",
            Self::Hqx => "dnxhr_hqx",
            Self::FourFourFour => "dnxhr_444",
        }
    }

    const VALID: &'static [&'static str] = &["lb", "sq", "hq", "hqx", "444"];
}

impl FromStr for DnxhrTier {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "lb" => Ok(Self::Lb),
            "sq" => Ok(Self::Sq),
            "hq" => Ok(Self::Hq),
            "hqx" => Ok(Self::Hqx),
            "444" => Ok(Self::FourFourFour),
            _ => Err(CoreError::InvalidConfig(format!(
                "invalid quality '{s}' for DNxHR (valid options: {})",
                Self::VALID.join(", ")
            ))),
        }
    }
}

/// ProRes quality tier, mapped to a `prores_ks` numeric profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProresTier {
    Proxy,
    Lt,
    Standard,
    Hq,
}

impl ProresTier {
    pub fn encoder_profile(self) -> &'static str {
        match self {
            Self::Proxy => "0",
            Self::Lt => "1",
            Self::Standard => "2",
            Self::Hq => "3",
        }
    }

    const VALID: &'static [&'static str] = &["proxy", "lt", "standard", "hq"];
}

impl FromStr for ProresTier {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "proxy" => Ok(Self::Proxy),
            "lt" => Ok(Self::Lt),
            "standard" => Ok(Self::Standard),
            "hq" => Ok(Self::Hq),
            _ => Err(CoreError::InvalidConfig(format!(
                "invalid quality '{s}' for ProRes (valid options: {})",
                Self::VALID.join(", ")
            ))),
        }
    }
}

/// Fully resolved delivery target.
///
/// Everything the classifier and the command builder need to know about the
/// desired output: target video codec, the set of audio codecs that do not
/// require re-encoding, the fixed output container, and the encoder profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetProfile {
    Dnxhr(DnxhrTier),
    Prores(ProresTier),
    H264,
}

impl TargetProfile {
    /// Codec name ffprobe reports for a stream already in the target format.
    pub fn video_codec(&self) -> &'static str {
        match self {
            Self::Dnxhr(_) => "dnxhd",
            Self::Prores(_) => "prores",
            Self::H264 => "h264",
        }
    }

    /// Audio codecs that are acceptable as-is for this target.
    pub fn acceptable_audio_codecs(&self) -> &'static [&'static str] {
        match self {
            Self::Dnxhr(_) | Self::Prores(_) => &["pcm_s16le", "pcm_s24le"],
            Self::H264 => &["aac"],
        }
    }

    /// Output container extension, fixed per target regardless of the source.
    pub fn container_ext(&self) -> &'static str {
        match self {
            Self::Dnxhr(_) | Self::Prores(_) => "mov",
            Self::H264 => "mp4",
        }
    }

    /// Suffix appended to the source file stem for the output name.
    pub fn output_suffix(&self) -> &'static str {
        match self {
            Self::Dnxhr(_) | Self::Prores(_) => "_converted",
            Self::H264 => "_export",
        }
    }
}

/// Main configuration for a conversion run.
///
/// Created by the CLI from parsed arguments and passed by shared reference to
/// every worker.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Input file or directory to process.
    pub input_path: PathBuf,
    /// Output directory override; outputs land next to their source when unset.
    pub output_dir: Option<PathBuf>,
    pub mode: ConversionMode,
    /// Codec family for editing mode; ignored in export mode.
    pub codec: EditingCodec,
    /// Quality tier name, validated against the selected codec family.
    pub quality: String,
    /// Overwrite existing output files instead of failing on conflict.
    pub force: bool,
    /// Pass ffmpeg's own output through instead of silencing it.
    pub verbose: bool,
    /// Classify and report without invoking ffmpeg.
    pub dry_run: bool,
    /// Number of concurrent workers.
    pub workers: usize,
}

impl CoreConfig {
    /// Resolves the mode/codec/quality selection into a [`TargetProfile`].
    ///
    /// Export mode has a single fixed H.264 target; the quality tier only
    /// applies to editing codecs.
    pub fn target_profile(&self) -> CoreResult<TargetProfile> {
        match self.mode {
            ConversionMode::Export => Ok(TargetProfile::H264),
            ConversionMode::Editing => match self.codec {
                EditingCodec::DnxHr => Ok(TargetProfile::Dnxhr(self.quality.parse()?)),
                EditingCodec::ProRes => Ok(TargetProfile::Prores(self.quality.parse()?)),
            },
        }
    }

    /// Validates the configuration, rejecting it before any file is touched.
    pub fn validate(&self) -> CoreResult<()> {
        if self.workers == 0 {
            return Err(CoreError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        self.target_profile().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CoreConfig {
        CoreConfig {
            input_path: PathBuf::from("in"),
            output_dir: None,
            mode: ConversionMode::Editing,
            codec: EditingCodec::DnxHr,
            quality: "hq".to_string(),
            force: false,
            verbose: false,
            dry_run: false,
            workers: 4,
        }
    }

    #[test]
    fn resolves_dnxhr_target() {
        let config = base_config();
        let target = config.target_profile().unwrap();
        assert_eq!(target, TargetProfile::Dnxhr(DnxhrTier::Hq));
        assert_eq!(target.video_codec(), "dnxhd");
        assert_eq!(target.container_ext(), "mov");
        assert_eq!(target.output_suffix(), "_converted");
    }

    #[test]
    fn resolves_export_target_ignoring_quality() {
        let mut config = base_config();
        config.mode = ConversionMode::Export;
        config.quality = "nonsense".to_string();
        assert_eq!(config.target_profile().unwrap(), TargetProfile::H264);
    }

    #[test]
    fn rejects_invalid_quality_tier() {
        let mut config = base_config();
        config.quality = "ultra".to_string();
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_prores_tier_from_dnxhr_set() {
        let mut config = base_config();
        config.codec = EditingCodec::ProRes;
        config.quality = "hqx".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_workers() {
        let mut config = base_config();
        config.workers = 0;
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn prores_tiers_map_to_numeric_profiles() {
        for (name, profile) in [("proxy", "0"), ("lt", "1"), ("standard", "2"), ("hq", "3")] {
            let tier: ProresTier = name.parse().unwrap();
            assert_eq!(tier.encoder_profile(), profile);
        }
    }
}
