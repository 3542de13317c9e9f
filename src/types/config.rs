//! MixConfig type describing the intent of a mix.
//!
//! The enumerations here are closed: free text from the command line or the
//! JSON-RPC surface is converted once through the `parse` functions (or serde)
//! and never re-validated deeper in the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{MixError, Result};

/// Transition length used when a style does not specify its own.
pub const DEFAULT_TRANSITION_SECONDS: u32 = 8;

/// Where candidate tracks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Tracks of a named playlist.
    #[serde(rename = "playlist")]
    Playlist,
    /// Tracks matching one or more genres.
    #[serde(rename = "genre")]
    Genre,
    /// Tracks by one or more artists.
    #[serde(rename = "artists", alias = "artist")]
    Artists,
    /// Placeholder tracks synthesized for the mix.
    #[serde(rename = "ai_generated", alias = "generative")]
    Generative,
}

impl SourceKind {
    /// Returns the string representation of the source kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Playlist => "playlist",
            SourceKind::Genre => "genre",
            SourceKind::Artists => "artists",
            SourceKind::Generative => "ai_generated",
        }
    }

    /// Parses a source kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "playlist" => Some(SourceKind::Playlist),
            "genre" => Some(SourceKind::Genre),
            "artists" | "artist" => Some(SourceKind::Artists),
            "ai_generated" | "generative" | "generated" => Some(SourceKind::Generative),
            _ => None,
        }
    }

    /// Returns true for the kinds served by a track catalog.
    pub fn is_catalog(&self) -> bool {
        !matches!(self, SourceKind::Generative)
    }

    /// Descriptor used when a kind is selected without one.
    pub fn default_descriptor(&self) -> &'static str {
        match self {
            SourceKind::Genre | SourceKind::Generative => "Electronic",
            SourceKind::Playlist | SourceKind::Artists => "",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit in which a transition length is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionUnit {
    Beats,
    Seconds,
}

/// Transition technique applied between consecutive tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MixingStyle {
    /// Tempo-locked blend over 32 beats.
    #[serde(rename = "beat_matched")]
    BeatMatched,
    /// Volume crossfade over 8 seconds.
    #[serde(rename = "crossfaded")]
    Crossfaded,
    /// Reverb tail wash over 16 seconds.
    #[serde(rename = "reverb_washes", alias = "reverb_wash")]
    ReverbWash,
    /// Hard edit with a 4 second overlap.
    #[serde(rename = "chopped_edits", alias = "chopped_edit")]
    ChoppedEdit,
}

impl MixingStyle {
    /// Returns the string representation of the mixing style.
    pub fn as_str(&self) -> &'static str {
        match self {
            MixingStyle::BeatMatched => "beat_matched",
            MixingStyle::Crossfaded => "crossfaded",
            MixingStyle::ReverbWash => "reverb_washes",
            MixingStyle::ChoppedEdit => "chopped_edits",
        }
    }

    /// Parses a mixing style from a string.
    ///
    /// Accepts both the underscore and the hyphenated spelling, singular or plural.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "beat_matched" | "beatmatched" => Some(MixingStyle::BeatMatched),
            "crossfaded" | "crossfade" => Some(MixingStyle::Crossfaded),
            "reverb_washes" | "reverb_wash" => Some(MixingStyle::ReverbWash),
            "chopped_edits" | "chopped_edit" => Some(MixingStyle::ChoppedEdit),
            _ => None,
        }
    }

    /// Nominal transition length for this style, in [`Self::transition_unit`] units.
    pub fn transition_length(&self) -> u32 {
        match self {
            MixingStyle::BeatMatched => 32,
            MixingStyle::Crossfaded => DEFAULT_TRANSITION_SECONDS,
            MixingStyle::ReverbWash => 16,
            MixingStyle::ChoppedEdit => 4,
        }
    }

    /// Unit of [`Self::transition_length`].
    pub fn transition_unit(&self) -> TransitionUnit {
        match self {
            MixingStyle::BeatMatched => TransitionUnit::Beats,
            _ => TransitionUnit::Seconds,
        }
    }
}

impl std::fmt::Display for MixingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the caller intends to do with the finished mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// One continuous audio file.
    #[default]
    #[serde(rename = "single_file")]
    SingleFile,
    /// Live playback through a streaming transport.
    #[serde(rename = "real_time")]
    RealTime,
    /// Text tracklist only.
    #[serde(rename = "tracklist")]
    Tracklist,
}

impl OutputFormat {
    /// Returns the string representation of the output format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::SingleFile => "single_file",
            OutputFormat::RealTime => "real_time",
            OutputFormat::Tracklist => "tracklist",
        }
    }

    /// Parses an output format from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "single_file" | "file" => Some(OutputFormat::SingleFile),
            "real_time" | "realtime" | "live" => Some(OutputFormat::RealTime),
            "tracklist" | "tracklist_only" => Some(OutputFormat::Tracklist),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive BPM bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoRange {
    pub min: u32,
    pub max: u32,
}

impl TempoRange {
    /// Creates a tempo range, rejecting min > max.
    pub fn new(min: u32, max: u32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Parses `"min-max"` or a single BPM value.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let parse_bpm = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| MixError::malformed_tempo_range(text))
        };

        match text.split_once('-') {
            Some((min, max)) => Self::new(parse_bpm(min)?, parse_bpm(max)?),
            None => {
                let bpm = parse_bpm(text)?;
                Self::new(bpm, bpm)
            }
        }
    }

    /// Returns true if `bpm` lies within the bounds (inclusive).
    pub fn contains(&self, bpm: u32) -> bool {
        (self.min..=self.max).contains(&bpm)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(MixError::inverted_tempo_range(self.min, self.max));
        }
        Ok(())
    }
}

impl std::fmt::Display for TempoRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Immutable description of the mix to build.
///
/// `energy_flow` and `dynamic_adaptation` are carried through to the result
/// but do not change how the sequence is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixConfig {
    /// Target length of the mix in minutes.
    pub duration_minutes: u32,

    /// Mood or occasion label, e.g. "workout".
    pub mood: String,

    /// Which provider supplies candidate tracks.
    pub source_kind: SourceKind,

    /// Playlist name, comma-separated genres or artists, or a generation style.
    pub source_value: String,

    /// Transition technique between tracks.
    pub mixing_style: MixingStyle,

    /// Free-text description of the intended energy trajectory.
    pub energy_flow: String,

    /// Inclusive BPM bounds for admitted tracks.
    pub tempo_range: TempoRange,

    /// Title keywords that disqualify a track.
    #[serde(default)]
    pub avoid: Vec<String>,

    /// Title keywords of which at least one must be present (when non-empty).
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub dynamic_adaptation: bool,

    #[serde(default)]
    pub output_format: OutputFormat,

    /// Target platform label such as "spotify", "youtube" or "local".
    #[serde(default)]
    pub output_platform: Option<String>,
}

impl MixConfig {
    /// Target mix length in seconds.
    pub fn total_duration_sec(&self) -> i64 {
        i64::from(self.duration_minutes) * 60
    }

    /// Validates the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.duration_minutes == 0 {
            return Err(MixError::invalid_duration(self.duration_minutes));
        }
        self.tempo_range.validate()
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            duration_minutes: 30,
            mood: "general".to_string(),
            source_kind: SourceKind::Genre,
            source_value: "Electronic".to_string(),
            mixing_style: MixingStyle::BeatMatched,
            energy_flow: "Build gradually to peak at 60%, then ease down".to_string(),
            tempo_range: TempoRange { min: 120, max: 130 },
            avoid: Vec::new(),
            include: Vec::new(),
            dynamic_adaptation: false,
            output_format: OutputFormat::SingleFile,
            output_platform: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn transition_lengths() {
        assert_eq!(MixingStyle::BeatMatched.transition_length(), 32);
        assert_eq!(MixingStyle::Crossfaded.transition_length(), 8);
        assert_eq!(MixingStyle::ReverbWash.transition_length(), 16);
        assert_eq!(MixingStyle::ChoppedEdit.transition_length(), 4);
        assert_eq!(MixingStyle::BeatMatched.transition_unit(), TransitionUnit::Beats);
        assert_eq!(MixingStyle::ChoppedEdit.transition_unit(), TransitionUnit::Seconds);
    }

    #[test]
    fn style_parsing() {
        assert_eq!(MixingStyle::parse("beat_matched"), Some(MixingStyle::BeatMatched));
        assert_eq!(MixingStyle::parse("Beat-Matched"), Some(MixingStyle::BeatMatched));
        assert_eq!(MixingStyle::parse("reverb_washes"), Some(MixingStyle::ReverbWash));
        assert_eq!(MixingStyle::parse("chopped-edit"), Some(MixingStyle::ChoppedEdit));
        assert_eq!(MixingStyle::parse("scratch"), None);
    }

    #[test]
    fn source_and_output_parsing() {
        assert_eq!(SourceKind::parse("ai_generated"), Some(SourceKind::Generative));
        assert_eq!(SourceKind::parse("Artist"), Some(SourceKind::Artists));
        assert_eq!(SourceKind::parse("radio"), None);
        assert_eq!(OutputFormat::parse("tracklist"), Some(OutputFormat::Tracklist));
        assert_eq!(OutputFormat::parse("real-time"), Some(OutputFormat::RealTime));
        assert_eq!(OutputFormat::parse("cassette"), None);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&MixingStyle::ReverbWash).unwrap();
        assert_eq!(json, "\"reverb_washes\"");
        let kind: SourceKind = serde_json::from_str("\"generative\"").unwrap();
        assert_eq!(kind, SourceKind::Generative);
        assert!(serde_json::from_str::<MixingStyle>("\"laser\"").is_err());
    }

    #[test]
    fn tempo_range_parsing() {
        assert_eq!(TempoRange::parse("120-130").unwrap(), TempoRange { min: 120, max: 130 });
        assert_eq!(TempoRange::parse(" 128 ").unwrap(), TempoRange { min: 128, max: 128 });
        let inverted = TempoRange::parse("140-120").unwrap_err();
        assert_eq!(inverted.code, ErrorCode::InvalidTempoRange);
        let garbage = TempoRange::parse("fast").unwrap_err();
        assert_eq!(garbage.code, ErrorCode::InvalidTempoRange);
    }

    #[test]
    fn tempo_range_bounds_are_inclusive() {
        let range = TempoRange::new(120, 135).unwrap();
        assert!(range.contains(120));
        assert!(range.contains(135));
        assert!(!range.contains(119));
        assert!(!range.contains(136));
    }

    #[test]
    fn config_validation() {
        let mut config = MixConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_duration_sec(), 1800);

        config.duration_minutes = 0;
        assert_eq!(config.validate().unwrap_err().code, ErrorCode::InvalidDuration);

        config.duration_minutes = 10;
        config.tempo_range = TempoRange { min: 130, max: 120 };
        assert_eq!(config.validate().unwrap_err().code, ErrorCode::InvalidTempoRange);
    }
}
