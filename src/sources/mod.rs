//! Track sources supplying candidate pools.
//!
//! A [`TrackSource`] turns a [`SourceRequest`] into a list of tracks. An empty
//! list is a valid answer and simply yields a mix with no tracks.
//!
//! - [`GenerativeSource`]: seeded placeholder tracks for `ai_generated` mixes
//! - [`Library`]: a local JSON catalog serving playlist, genre and artist requests
//! - [`SourceRouter`]: dispatches a request to whichever of the two applies

mod generative;
mod library;

pub use generative::{GenerativeSource, GENERATED_TRACK_SECONDS, MUSICAL_KEYS};
pub use library::Library;

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::types::{SourceKind, TempoRange, Track};

/// What a mix build asks a source for.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRequest {
    pub kind: SourceKind,
    /// Playlist name, comma-separated genres or artists, or a generation style.
    pub descriptor: String,
    pub tempo_range: TempoRange,
    /// Target mix length; generative sources size their pool from it.
    pub target_duration_sec: i64,
    /// Seed for sources that draw random values.
    pub seed: u64,
}

/// Supplies candidate tracks for a mix.
pub trait TrackSource {
    fn fetch(&self, request: &SourceRequest) -> Vec<Track>;
}

/// Default source: generative requests go to [`GenerativeSource`], catalog
/// requests to the configured [`Library`], or nowhere when none is loaded.
#[derive(Debug, Default)]
pub struct SourceRouter {
    library: Option<Library>,
    generative: GenerativeSource,
}

impl SourceRouter {
    /// Creates a router without a catalog; catalog requests return no tracks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router serving catalog requests from `library`.
    pub fn with_library(library: Library) -> Self {
        Self {
            library: Some(library),
            generative: GenerativeSource,
        }
    }

    /// Creates a router, loading the catalog at `catalog` when given.
    pub fn load(catalog: Option<&Path>) -> Result<Self> {
        match catalog {
            Some(path) => Ok(Self::with_library(Library::load(path)?)),
            None => Ok(Self::new()),
        }
    }

    /// Returns true if a catalog is loaded.
    pub fn has_library(&self) -> bool {
        self.library.is_some()
    }
}

impl TrackSource for SourceRouter {
    fn fetch(&self, request: &SourceRequest) -> Vec<Track> {
        if !request.kind.is_catalog() {
            return self.generative.fetch(request);
        }

        match &self.library {
            Some(library) => library.fetch(request),
            None => {
                info!(
                    kind = %request.kind,
                    descriptor = %request.descriptor,
                    "no track library configured, catalog source is empty"
                );
                Vec::new()
            }
        }
    }
}
