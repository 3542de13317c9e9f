//! Core types for automix.
//!
//! - [`MixConfig`]: what the caller wants (duration, style, tempo, keywords)
//! - [`Track`]: a candidate supplied by a track source
//! - [`SequenceItem`], [`TimestampEntry`], [`Mix`]: what a build produces

mod config;
mod mix;
mod track;

pub use config::{
    MixConfig, MixingStyle, OutputFormat, SourceKind, TempoRange, TransitionUnit,
    DEFAULT_TRANSITION_SECONDS,
};
pub use mix::{Mix, SequenceItem, TimestampEntry};
pub use track::{compute_track_id, Track};
