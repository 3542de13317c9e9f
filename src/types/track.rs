//! Track type representing one candidate for a mix.
//!
//! Tracks come from a [`TrackSource`](crate::sources::TrackSource) and are
//! immutable once obtained. Generated tracks get a deterministic id computed
//! from the generation parameters.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A candidate track supplied by a track source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Provider-specific identifier.
    pub id: String,

    /// Display title. Keyword filtering runs against this text.
    pub title: String,

    /// Nominal playing time in seconds. Must be > 0.
    #[serde(alias = "duration")]
    pub duration_sec: u32,

    /// Tempo in beats per minute.
    pub bpm: u32,

    /// Musical key, e.g. "F#".
    #[serde(default)]
    pub key: String,

    /// Genre or style label.
    #[serde(default)]
    pub genre: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Where the audio can be fetched from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Track {
    /// Creates a track with the required fields; key and genre start empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration_sec: u32, bpm: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_sec,
            bpm,
            key: String::new(),
            genre: String::new(),
            artist: None,
            url: None,
        }
    }

    /// Sets the artist.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Sets the genre label.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Returns the artist, or "Unknown" when the provider gave none.
    pub fn artist_or_unknown(&self) -> &str {
        self.artist.as_deref().unwrap_or("Unknown")
    }

    /// Validates that the track meets all constraints.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.id.is_empty() {
            return Some("Track ID cannot be empty".to_string());
        }

        if self.duration_sec == 0 {
            return Some(format!("Track '{}' has zero duration", self.title));
        }

        None
    }
}

/// Computes a deterministic id for a generated track.
///
/// The id is the first 16 hex characters of the SHA256 hash of
/// `{style}:{seed}:{index}`, so the same seed reproduces the same pool.
pub fn compute_track_id(style: &str, seed: u64, index: usize) -> String {
    let input = format!("{}:{}:{}", style, seed, index);
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_deterministic() {
        let id1 = compute_track_id("Synthwave, EDM", 42, 3);
        let id2 = compute_track_id("Synthwave, EDM", 42, 3);
        assert_eq!(id1, id2);
        assert_eq!(id1.len(), 16);
        assert!(id1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn track_id_varies_with_params() {
        let base = compute_track_id("synthwave", 42, 0);
        assert_ne!(base, compute_track_id("synthwave", 43, 0));
        assert_ne!(base, compute_track_id("synthwave", 42, 1));
        assert_ne!(base, compute_track_id("jazz", 42, 0));
    }

    #[test]
    fn artist_defaults_to_unknown() {
        let track = Track::new("t1", "Nightdrive", 200, 128);
        assert_eq!(track.artist_or_unknown(), "Unknown");
        let track = track.with_artist("Kavinsky");
        assert_eq!(track.artist_or_unknown(), "Kavinsky");
    }

    #[test]
    fn validation() {
        assert!(Track::new("t1", "A", 200, 130).validate().is_none());
        assert!(Track::new("t1", "A", 0, 130).validate().is_some());
        assert!(Track::new("", "A", 200, 130).validate().is_some());
    }

    #[test]
    fn deserializes_library_shape() {
        let json = r#"{"id":"x","title":"Drop","duration":180,"bpm":126,"artist":"Someone"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.duration_sec, 180);
        assert_eq!(track.artist.as_deref(), Some("Someone"));
        assert!(track.genre.is_empty());
    }
}
