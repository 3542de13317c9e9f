//! Free-text request handling.
//!
//! This is not a parser: every prompt maps to the same 45-minute workout
//! configuration. It exists so the command line and RPC surfaces can accept
//! prompts while a real interpreter is out of scope.

use tracing::debug;

use crate::types::{MixConfig, MixingStyle, OutputFormat, SourceKind, TempoRange};

/// Maps a free-text request to a mix configuration.
///
/// The prompt text is ignored.
pub fn parse_prompt(prompt: &str) -> MixConfig {
    debug!(chars = prompt.len(), "prompt ignored, using fixed workout configuration");
    MixConfig {
        duration_minutes: 45,
        mood: "workout".to_string(),
        source_kind: SourceKind::Genre,
        source_value: "Synthwave, EDM".to_string(),
        mixing_style: MixingStyle::BeatMatched,
        energy_flow: "Build gradually to peak at 80%, then ease down".to_string(),
        tempo_range: TempoRange { min: 128, max: 135 },
        avoid: vec!["vocals".to_string()],
        include: vec!["heavy bass drops".to_string()],
        dynamic_adaptation: true,
        output_format: OutputFormat::SingleFile,
        output_platform: None,
    }
}
