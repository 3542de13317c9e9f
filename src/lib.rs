//! automix: continuous music mix sequencing.
//!
//! Takes a mix request (duration, mood, track source, mixing style, tempo
//! window, keyword filters) and a pool of candidate tracks, and produces an
//! ordered timeline with transition lengths, per-track energy values and a
//! timestamped tracklist.
//!
//! # Modules
//!
//! - [`types`]: Core data types (MixConfig, Track, SequenceItem, Mix)
//! - [`engine`]: Filtering, sequencing, energy curve and the mixing session
//! - [`sources`]: Track sources (generative pool, local JSON library)
//! - [`export`]: Tracklist files and other export formats
//! - [`presets`]: Built-in starting configurations
//! - [`config`]: Runtime configuration (AppConfig)
//! - [`error`]: Error types and codes (MixError, ErrorCode)
//! - [`rpc`]: JSON-RPC 2.0 server over stdio
//!
//! # Example
//!
//! ```rust,ignore
//! use automix::{MixConfig, MixSession, OutputFormat, SourceKind, SourceRouter};
//!
//! let config = MixConfig {
//!     duration_minutes: 45,
//!     source_kind: SourceKind::Generative,
//!     source_value: "Synthwave".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut session = MixSession::new(SourceRouter::new(), "./mixes");
//! let mix = session.create_mix(&config, Some(42))?;
//! for entry in &mix.timestamps {
//!     println!("{} - {}", entry.timestamp, entry.title);
//! }
//! session.export(OutputFormat::Tracklist, None)?;
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod presets;
pub mod prompt;
pub mod rpc;
pub mod sources;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::AppConfig;
pub use engine::{mix_tracks, MixSession};
pub use error::{ErrorCode, MixError, Result};
pub use export::{export_mix, ExportOutcome};
pub use presets::Preset;
pub use sources::{SourceRouter, TrackSource};
pub use types::{Mix, MixConfig, MixingStyle, OutputFormat, SourceKind, TempoRange, Track};
