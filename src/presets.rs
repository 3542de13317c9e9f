//! Built-in mix presets.

use serde::Serialize;

use crate::error::{MixError, Result};
use crate::types::{MixConfig, MixingStyle, OutputFormat, SourceKind, TempoRange};

/// A named starting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Workout,
    Chill,
    Party,
    Focus,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 4] = [Preset::Workout, Preset::Chill, Preset::Party, Preset::Focus];

    /// Returns the identifier used on the command line and over RPC.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Workout => "workout",
            Preset::Chill => "chill",
            Preset::Party => "party",
            Preset::Focus => "focus",
        }
    }

    /// Human-readable title.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Workout => "Workout Mix",
            Preset::Chill => "Chill Vibes",
            Preset::Party => "Party Mix",
            Preset::Focus => "Focus/Study",
        }
    }

    /// Parses a preset name.
    pub fn parse(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MixError::unknown_preset(s))
    }

    /// Returns the preset's configuration.
    pub fn config(&self) -> MixConfig {
        match self {
            Preset::Workout => preset_config(
                45,
                "workout",
                "EDM, House, Trap",
                MixingStyle::BeatMatched,
                (128, 140),
                &["slow", "ballad"],
                &["bass drops", "energy"],
                "Build gradually to peak at 80%, then maintain high energy",
            ),
            Preset::Chill => preset_config(
                60,
                "relaxation",
                "Ambient, Lo-fi, Chillhop",
                MixingStyle::Crossfaded,
                (70, 90),
                &["heavy", "aggressive"],
                &["atmospheric", "smooth"],
                "Gentle flow with subtle energy variations",
            ),
            Preset::Party => preset_config(
                90,
                "party",
                "Pop, Dance, Hip-hop",
                MixingStyle::ChoppedEdit,
                (120, 135),
                &["instrumental only"],
                &["vocals", "catchy hooks"],
                "High energy throughout with dynamic peaks",
            ),
            Preset::Focus => preset_config(
                120,
                "focus",
                "Classical, Instrumental, Jazz",
                MixingStyle::ReverbWash,
                (60, 80),
                &["vocals", "distracting"],
                &["melodic", "calming"],
                "Consistent, non-distracting background music",
            ),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn preset_config(
    minutes: u32,
    mood: &str,
    genres: &str,
    style: MixingStyle,
    (min, max): (u32, u32),
    avoid: &[&str],
    include: &[&str],
    energy_flow: &str,
) -> MixConfig {
    MixConfig {
        duration_minutes: minutes,
        mood: mood.to_string(),
        source_kind: SourceKind::Genre,
        source_value: genres.to_string(),
        mixing_style: style,
        energy_flow: energy_flow.to_string(),
        tempo_range: TempoRange { min, max },
        avoid: avoid.iter().map(|s| s.to_string()).collect(),
        include: include.iter().map(|s| s.to_string()).collect(),
        dynamic_adaptation: false,
        output_format: OutputFormat::SingleFile,
        output_platform: None,
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preset listing entry returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub config: MixConfig,
}

/// Lists every preset with its configuration.
pub fn list_presets() -> Vec<PresetInfo> {
    Preset::ALL
        .into_iter()
        .map(|preset| PresetInfo {
            id: preset.as_str(),
            name: preset.label(),
            config: preset.config(),
        })
        .collect()
}
