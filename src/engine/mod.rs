//! Mix sequencing engine.
//!
//! Pipeline: [`filter_tracks`] → [`build_sequence`] (calling [`energy_at`] per
//! item) → [`derive_timestamps`] → [`assemble`]. [`MixSession`] wraps the
//! pipeline with a track source and keeps the most recent mix for export.

mod energy;
mod filter;
mod sequence;
mod session;
mod timestamps;

pub use energy::{energy_at, FALLBACK_ENERGY, PEAK_FRACTION};
pub use filter::filter_tracks;
pub use sequence::build_sequence;
pub use session::{assemble, mix_tracks, MixSession};
pub use timestamps::{derive_timestamps, format_offset};
