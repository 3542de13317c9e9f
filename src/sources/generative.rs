//! Seeded placeholder tracks for generated mixes.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::{SourceRequest, TrackSource};
use crate::types::{compute_track_id, Track};

/// Length of every generated track (4 minutes).
pub const GENERATED_TRACK_SECONDS: u32 = 240;

/// The twelve pitch classes a generated track can be in.
pub const MUSICAL_KEYS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Produces one 4-minute track per 4 minutes of target duration.
///
/// BPM is drawn uniformly from the requested tempo range and the key from
/// [`MUSICAL_KEYS`], both from a `ChaCha8Rng` seeded with the request seed, so
/// the same request always yields the same pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerativeSource;

impl TrackSource for GenerativeSource {
    fn fetch(&self, request: &SourceRequest) -> Vec<Track> {
        if request.tempo_range.validate().is_err() {
            warn!(range = %request.tempo_range, "inverted tempo range, nothing to generate");
            return Vec::new();
        }

        let minutes = request.target_duration_sec.max(0) / 60;
        let count = (minutes / 4) as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(request.seed);

        let tracks: Vec<Track> = (0..count)
            .map(|i| {
                let id = compute_track_id(&request.descriptor, request.seed, i);
                let bpm = rng.gen_range(request.tempo_range.min..=request.tempo_range.max);
                let key = MUSICAL_KEYS.choose(&mut rng).copied().unwrap_or("C");
                Track {
                    url: Some(format!("generated://{}", id)),
                    id,
                    title: format!("Generated Track {}", i + 1),
                    duration_sec: GENERATED_TRACK_SECONDS,
                    bpm,
                    key: key.to_string(),
                    genre: request.descriptor.clone(),
                    artist: None,
                }
            })
            .collect();

        info!(
            style = %request.descriptor,
            seed = request.seed,
            count = tracks.len(),
            "generated placeholder tracks"
        );
        tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SourceKind, TempoRange};

    fn request(minutes: i64, seed: u64) -> SourceRequest {
        SourceRequest {
            kind: SourceKind::Generative,
            descriptor: "Tame Impala meets Daft Punk".to_string(),
            tempo_range: TempoRange { min: 120, max: 128 },
            target_duration_sec: minutes * 60,
            seed,
        }
    }

    #[test]
    fn one_track_per_four_minutes() {
        assert_eq!(GenerativeSource.fetch(&request(45, 1)).len(), 11);
        assert_eq!(GenerativeSource.fetch(&request(30, 1)).len(), 7);
        assert!(GenerativeSource.fetch(&request(3, 1)).is_empty());
    }

    #[test]
    fn tracks_respect_request() {
        let tracks = GenerativeSource.fetch(&request(60, 9));
        for (i, track) in tracks.iter().enumerate() {
            assert_eq!(track.title, format!("Generated Track {}", i + 1));
            assert_eq!(track.duration_sec, GENERATED_TRACK_SECONDS);
            assert!((120..=128).contains(&track.bpm));
            assert!(MUSICAL_KEYS.contains(&track.key.as_str()));
            assert_eq!(track.genre, "Tame Impala meets Daft Punk");
            assert!(track.validate().is_none());
        }
    }

    #[test]
    fn same_seed_same_pool() {
        let a = GenerativeSource.fetch(&request(40, 42));
        let b = GenerativeSource.fetch(&request(40, 42));
        assert_eq!(a, b);
    }

    #[test]
    fn single_value_tempo_range() {
        let mut req = request(8, 3);
        req.tempo_range = TempoRange { min: 90, max: 90 };
        let tracks = GenerativeSource.fetch(&req);
        assert!(tracks.iter().all(|t| t.bpm == 90));
    }
}
