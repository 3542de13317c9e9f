//! Mix assembly and the per-session current-mix slot.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use super::filter::filter_tracks;
use super::sequence::build_sequence;
use super::timestamps::derive_timestamps;
use crate::error::{MixError, Result};
use crate::export::{export_mix, ExportOutcome};
use crate::sources::{SourceRequest, TrackSource};
use crate::types::{Mix, MixConfig, OutputFormat, SequenceItem, Track};

/// Combines a built sequence with its configuration into a [`Mix`].
pub fn assemble(config: &MixConfig, sequence: Vec<SequenceItem>, seed: u64) -> Mix {
    let timestamps = derive_timestamps(&sequence);
    Mix {
        config: config.clone(),
        sequence,
        timestamps,
        total_duration_sec: config.total_duration_sec(),
        created_at: Utc::now(),
        seed,
    }
}

/// Filters `tracks`, lays them out and assembles the result.
///
/// Pure apart from the creation timestamp; does not validate `config`.
pub fn mix_tracks(tracks: &[Track], config: &MixConfig, seed: u64) -> Mix {
    let filtered = filter_tracks(tracks, config);
    let sequence = build_sequence(&filtered, config);
    assemble(config, sequence, seed)
}

/// One mixing session: a track source plus the most recently built mix.
///
/// A session holds a single current-mix slot that every build overwrites.
/// Sessions are not meant to be shared: give each logical mixing session its
/// own `MixSession`. Building takes `&mut self`, so concurrent builds against
/// one instance do not compile rather than racing on the slot.
pub struct MixSession<S: TrackSource> {
    source: S,
    output_dir: PathBuf,
    current: Option<Mix>,
}

impl<S: TrackSource> MixSession<S> {
    /// Creates a session exporting default-named artifacts into `output_dir`.
    pub fn new(source: S, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output_dir: output_dir.into(),
            current: None,
        }
    }

    /// Builds a mix for `config` and makes it the session's current mix.
    ///
    /// `seed` drives generative sources; a random one is drawn when absent.
    /// Nothing in the session changes unless the build succeeds, so a failed
    /// call can simply be retried.
    pub fn create_mix(&mut self, config: &MixConfig, seed: Option<u64>) -> Result<Mix> {
        config.validate()?;

        let seed = seed.unwrap_or_else(rand::random);
        info!(
            minutes = config.duration_minutes,
            mood = %config.mood,
            source = %config.source_kind,
            style = %config.mixing_style,
            "creating mix"
        );

        let request = SourceRequest {
            kind: config.source_kind,
            descriptor: config.source_value.clone(),
            tempo_range: config.tempo_range,
            target_duration_sec: config.total_duration_sec(),
            seed,
        };
        let candidates = self.source.fetch(&request);
        let mix = mix_tracks(&candidates, config, seed);

        info!(
            candidates = candidates.len(),
            tracks = mix.track_count(),
            "mix created"
        );
        self.current = Some(mix.clone());
        Ok(mix)
    }

    /// Returns the most recently built mix, if any.
    pub fn current_mix(&self) -> Option<&Mix> {
        self.current.as_ref()
    }

    /// Exports the current mix.
    ///
    /// Fails with `NO_MIX_BUILT` when nothing has been built in this session.
    pub fn export(&self, format: OutputFormat, filename: Option<&Path>) -> Result<ExportOutcome> {
        let mix = self.current.as_ref().ok_or_else(MixError::no_mix_built)?;
        export_mix(mix, format, filename, &self.output_dir)
    }

    /// Directory default-named exports are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
