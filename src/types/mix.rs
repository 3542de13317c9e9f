//! Result types produced by a mix build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::{MixConfig, TransitionUnit};
use super::track::Track;

/// One track placed on the mix timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceItem {
    pub track: Track,

    /// Offset of the track start from the beginning of the mix, in seconds.
    /// Signed: a transition longer than the preceding track moves the clock backwards.
    pub start_sec: i64,

    /// `start_sec + track.duration_sec`.
    pub end_sec: i64,

    /// Overlap with the previous track. 0 for the first item.
    pub transition_in: u32,

    /// Overlap with the next track. 0 for the last filtered track.
    pub transition_out: u32,

    /// Unit of `transition_in`/`transition_out`.
    pub transition_unit: TransitionUnit,

    /// Intensity at this position, nominally in [0, 1].
    pub energy: f64,
}

/// A row of the human-readable tracklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampEntry {
    /// 1-based position in the mix.
    pub position: usize,
    /// Start offset formatted as `MM:SS`.
    pub timestamp: String,
    pub title: String,
    pub artist: String,
    pub bpm: u32,
}

/// A finished mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mix {
    pub config: MixConfig,
    pub sequence: Vec<SequenceItem>,
    pub timestamps: Vec<TimestampEntry>,
    /// Target length in seconds (`duration_minutes * 60`).
    pub total_duration_sec: i64,
    pub created_at: DateTime<Utc>,
    /// Seed handed to the track source, recorded so a generative mix can be rebuilt.
    pub seed: u64,
}

impl Mix {
    /// Number of tracks in the mix.
    pub fn track_count(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if no track survived filtering.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
