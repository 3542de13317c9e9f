//! Local JSON track library.
//!
//! File layout:
//!
//! ```json
//! {
//!   "tracks": [{ "id": "t1", "title": "Opener", "duration": 210, "bpm": 126,
//!                "genre": "House", "artist": "Someone" }],
//!   "playlists": { "warmup": ["t1"] }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::{SourceRequest, TrackSource};
use crate::error::{MixError, Result};
use crate::types::{SourceKind, Track};

/// A catalog of tracks and named playlists loaded from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Library {
    tracks: Vec<Track>,
    /// Playlist name to ordered track ids.
    #[serde(default)]
    playlists: HashMap<String, Vec<String>>,
}

impl Library {
    /// Loads a library from a JSON file.
    ///
    /// Tracks that fail validation are skipped with a warning.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MixError::catalog_load_failed(path.display(), e))?;
        let mut library: Library = serde_json::from_str(&text)
            .map_err(|e| MixError::catalog_load_failed(path.display(), e))?;

        library.tracks.retain(|track| match track.validate() {
            None => true,
            Some(reason) => {
                warn!(id = %track.id, %reason, "skipping invalid library track");
                false
            }
        });

        info!(
            path = %path.display(),
            tracks = library.tracks.len(),
            playlists = library.playlists.len(),
            "loaded track library"
        );
        Ok(library)
    }

    /// Creates a library from tracks without playlists.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            playlists: HashMap::new(),
        }
    }

    /// Adds or replaces a playlist.
    pub fn add_playlist(&mut self, name: impl Into<String>, track_ids: Vec<String>) {
        self.playlists.insert(name.into(), track_ids);
    }

    /// Returns the number of tracks in the library.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns true if the library holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn playlist(&self, name: &str) -> Vec<Track> {
        let name = name.trim();
        let Some(ids) = self
            .playlists
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, ids)| ids)
        else {
            info!(playlist = %name, "playlist not found in library");
            return Vec::new();
        };

        ids.iter()
            .filter_map(|id| {
                let track = self.tracks.iter().find(|t| &t.id == id);
                if track.is_none() {
                    warn!(playlist = %name, %id, "playlist references unknown track");
                }
                track.cloned()
            })
            .collect()
    }

    fn matching<F>(&self, descriptor: &str, field: F) -> Vec<Track>
    where
        F: Fn(&Track) -> Option<&str>,
    {
        let terms = split_terms(descriptor);
        if terms.is_empty() {
            return Vec::new();
        }

        self.tracks
            .iter()
            .filter(|track| {
                field(track)
                    .map(str::to_lowercase)
                    .is_some_and(|value| terms.iter().any(|term| value.contains(term.as_str())))
            })
            .cloned()
            .collect()
    }
}

impl TrackSource for Library {
    fn fetch(&self, request: &SourceRequest) -> Vec<Track> {
        match request.kind {
            SourceKind::Playlist => self.playlist(&request.descriptor),
            SourceKind::Genre => self.matching(&request.descriptor, |t| Some(t.genre.as_str())),
            SourceKind::Artists => self.matching(&request.descriptor, |t| t.artist.as_deref()),
            SourceKind::Generative => Vec::new(),
        }
    }
}

/// Splits `"EDM, House"` into lowercase, non-empty terms.
fn split_terms(descriptor: &str) -> Vec<String> {
    descriptor
        .split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}
