//! Command-line argument parser.
//!
//! Enumerated flags are converted to domain types while parsing, so an
//! unknown style or output format is reported by clap before any work starts.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::error::Result;
use crate::presets::Preset;
use crate::prompt::parse_prompt;
use crate::types::{MixConfig, MixingStyle, OutputFormat, SourceKind, TempoRange};

/// automix: build continuous music mixes with tempo-aware transitions
#[derive(Parser, Debug)]
#[command(name = "automix")]
#[command(about = "Build continuous music mixes with tempo-aware transitions and energy curves")]
#[command(version)]
#[command(after_help = "Examples:
  automix --duration 45 --mood workout --genre \"EDM, House\" --bpm 128-135
  automix --duration 60 --mood chill --genre \"Ambient, Lo-fi\" --style crossfaded --bpm 70-90
  automix --duration 30 --source ai_generated --ai-style \"Tame Impala meets Daft Punk\" --bpm 120-128
  automix --duration 45 --mood party --genre \"Pop, Dance\" --output tracklist
  automix --preset workout --duration 60")]
pub struct Cli {
    /// Free-text request (mapped to a fixed workout configuration)
    #[arg(long)]
    pub prompt: Option<String>,

    /// Duration in minutes [default: 30]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub duration: Option<u32>,

    /// Mood or occasion (e.g., workout, party, study) [default: general]
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Source type for tracks: genre, playlist, artists, ai_generated
    #[arg(short, long, value_parser = parse_source)]
    pub source: Option<SourceKind>,

    /// Genre(s) for track selection (comma-separated)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Playlist name
    #[arg(short, long)]
    pub playlist: Option<String>,

    /// Artist names (comma-separated)
    #[arg(short, long)]
    pub artists: Option<String>,

    /// Generation style for ai_generated sources (e.g., "Tame Impala meets Daft Punk")
    #[arg(long)]
    pub ai_style: Option<String>,

    /// Mixing style: beat_matched, crossfaded, reverb_washes, chopped_edits [default: beat_matched]
    #[arg(long, value_parser = parse_style)]
    pub style: Option<MixingStyle>,

    /// Energy flow description
    #[arg(long)]
    pub energy: Option<String>,

    /// BPM range, 'min-max' or a single value [default: 120-130]
    #[arg(long, value_parser = parse_tempo)]
    pub bpm: Option<TempoRange>,

    /// Title keywords to avoid (e.g., vocals slow)
    #[arg(long, num_args = 1..)]
    pub avoid: Vec<String>,

    /// Title keywords to include (e.g., bass saxophone)
    #[arg(long, num_args = 1..)]
    pub include: Vec<String>,

    /// Output format: single_file, real_time, tracklist [default: single_file]
    #[arg(short, long, value_parser = parse_output)]
    pub output: Option<OutputFormat>,

    /// Output platform
    #[arg(long, value_parser = ["spotify", "youtube", "local"])]
    pub platform: Option<String>,

    /// Output filename
    #[arg(short, long)]
    pub filename: Option<PathBuf>,

    /// Start from a preset: workout, chill, party, focus
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// Enable dynamic adaptation
    #[arg(long)]
    pub dynamic: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the mix as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for generated track pools
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON track library for playlist, genre and artist sources
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory for default-named exports
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Run in daemon mode (JSON-RPC over stdio)
    #[arg(long)]
    pub daemon: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns true if running in daemon mode.
    pub fn is_daemon_mode(&self) -> bool {
        self.daemon
    }

    /// Builds the mix configuration.
    ///
    /// Starts from the prompt, the preset, or the built-in defaults (in that
    /// order of precedence) and applies every explicitly given flag on top.
    pub fn mix_config(&self) -> Result<MixConfig> {
        let mut config = if let Some(ref prompt) = self.prompt {
            parse_prompt(prompt)
        } else if let Some(preset) = self.preset {
            preset.config()
        } else {
            MixConfig::default()
        };

        if let Some(duration) = self.duration {
            config.duration_minutes = duration;
        }
        if let Some(ref mood) = self.mood {
            config.mood = mood.clone();
        }

        let (kind, value) = self.resolve_source(&config);
        config.source_kind = kind;
        config.source_value = value;

        if let Some(style) = self.style {
            config.mixing_style = style;
        }
        if let Some(ref energy) = self.energy {
            config.energy_flow = energy.clone();
        }
        if let Some(range) = self.bpm {
            config.tempo_range = range;
        }
        if !self.avoid.is_empty() {
            config.avoid = self.avoid.clone();
        }
        if !self.include.is_empty() {
            config.include = self.include.clone();
        }
        if self.dynamic {
            config.dynamic_adaptation = true;
        }
        if let Some(output) = self.output {
            config.output_format = output;
        }
        if self.platform.is_some() {
            config.output_platform = self.platform.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides to the runtime configuration.
    pub fn apply_to(&self, mut app: AppConfig) -> AppConfig {
        if let Some(ref dir) = self.output_dir {
            app.output_dir = Some(dir.clone());
        }
        if let Some(ref catalog) = self.catalog {
            app.catalog_path = Some(catalog.clone());
        }
        if self.seed.is_some() {
            app.seed = self.seed;
        }
        app
    }

    /// Picks the source kind and descriptor.
    ///
    /// `--source` wins; otherwise the first descriptor flag given implies its
    /// kind. A kind without a matching descriptor flag keeps the base
    /// descriptor when the kind is unchanged, or falls back to the kind's default.
    fn resolve_source(&self, base: &MixConfig) -> (SourceKind, String) {
        let implied = [
            (SourceKind::Genre, &self.genre),
            (SourceKind::Playlist, &self.playlist),
            (SourceKind::Artists, &self.artists),
            (SourceKind::Generative, &self.ai_style),
        ]
        .into_iter()
        .find(|(_, value)| value.is_some())
        .map(|(kind, _)| kind);

        let kind = self.source.or(implied).unwrap_or(base.source_kind);
        let flag = match kind {
            SourceKind::Genre => &self.genre,
            SourceKind::Playlist => &self.playlist,
            SourceKind::Artists => &self.artists,
            SourceKind::Generative => &self.ai_style,
        };

        let value = match flag {
            Some(value) => value.clone(),
            None if kind == base.source_kind => base.source_value.clone(),
            None => kind.default_descriptor().to_string(),
        };
        (kind, value)
    }
}

fn parse_source(s: &str) -> std::result::Result<SourceKind, String> {
    SourceKind::parse(s).ok_or_else(|| format!("unknown source '{s}' (genre, playlist, artists, ai_generated)"))
}

fn parse_style(s: &str) -> std::result::Result<MixingStyle, String> {
    MixingStyle::parse(s).ok_or_else(|| {
        format!("unknown style '{s}' (beat_matched, crossfaded, reverb_washes, chopped_edits)")
    })
}

fn parse_output(s: &str) -> std::result::Result<OutputFormat, String> {
    OutputFormat::parse(s)
        .ok_or_else(|| format!("unknown output '{s}' (single_file, real_time, tracklist)"))
}

fn parse_tempo(s: &str) -> std::result::Result<TempoRange, String> {
    TempoRange::parse(s).map_err(|e| e.message)
}

fn parse_preset(s: &str) -> std::result::Result<Preset, String> {
    Preset::parse(s).map_err(|e| e.message)
}
