//! Keyword and tempo filtering of candidate tracks.

use tracing::debug;

use crate::types::{MixConfig, Track};

/// Returns the tracks admitted by `config`, in input order.
///
/// A track is rejected when its title contains an avoid keyword, when include
/// keywords are given and its title contains none of them, or when its BPM
/// lies outside the tempo range. Keyword matching is a case-insensitive
/// substring test on the keyword exactly as given, whitespace included.
pub fn filter_tracks(tracks: &[Track], config: &MixConfig) -> Vec<Track> {
    let avoid = normalize_keywords(&config.avoid);
    let include = normalize_keywords(&config.include);

    let admitted: Vec<Track> = tracks
        .iter()
        .filter(|track| admits(track, &avoid, &include, config))
        .cloned()
        .collect();

    debug!(
        candidates = tracks.len(),
        admitted = admitted.len(),
        "filtered track pool"
    );
    admitted
}

fn admits(track: &Track, avoid: &[String], include: &[String], config: &MixConfig) -> bool {
    let title = track.title.to_lowercase();

    if let Some(keyword) = avoid.iter().find(|k| title.contains(k.as_str())) {
        debug!(title = %track.title, keyword = %keyword, "rejected: avoid keyword");
        return false;
    }

    if !include.is_empty() && !include.iter().any(|k| title.contains(k.as_str())) {
        debug!(title = %track.title, "rejected: no include keyword");
        return false;
    }

    if !config.tempo_range.contains(track.bpm) {
        debug!(title = %track.title, bpm = track.bpm, "rejected: outside tempo range");
        return false;
    }

    true
}

fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| k.to_lowercase())
        .collect()
}
