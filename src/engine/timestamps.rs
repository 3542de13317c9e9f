//! Tracklist rows derived from a built sequence.

use crate::types::{SequenceItem, TimestampEntry};

/// Formats an offset in seconds as zero-padded `MM:SS`.
///
/// Minutes use floor division and seconds floor modulo, so negative offsets
/// render as e.g. `-1:55` for -5 s.
pub fn format_offset(offset_sec: i64) -> String {
    let minutes = offset_sec.div_euclid(60);
    let seconds = offset_sec.rem_euclid(60);
    format!("{:02}:{:02}", minutes, seconds)
}

/// Returns one entry per sequence item, numbered from 1.
pub fn derive_timestamps(sequence: &[SequenceItem]) -> Vec<TimestampEntry> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, item)| TimestampEntry {
            position: i + 1,
            timestamp: format_offset(item.start_sec),
            title: item.track.title.clone(),
            artist: item.track.artist_or_unknown().to_string(),
            bpm: item.track.bpm,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Track, TransitionUnit};

    fn item(track: Track, start_sec: i64) -> SequenceItem {
        SequenceItem {
            end_sec: start_sec + i64::from(track.duration_sec),
            track,
            start_sec,
            transition_in: 0,
            transition_out: 0,
            transition_unit: TransitionUnit::Seconds,
            energy: 0.5,
        }
    }

    #[test]
    fn formats_offsets() {
        assert_eq!(format_offset(0), "00:00");
        assert_eq!(format_offset(125), "02:05");
        assert_eq!(format_offset(59), "00:59");
        assert_eq!(format_offset(3600), "60:00");
        assert_eq!(format_offset(6005), "100:05");
    }

    #[test]
    fn negative_offsets_use_floor_semantics() {
        assert_eq!(format_offset(-5), "-1:55");
        assert_eq!(format_offset(-60), "-1:00");
    }

    #[test]
    fn entries_carry_track_fields() {
        let sequence = vec![
            item(Track::new("a", "Opener", 200, 128).with_artist("DJ One"), 0),
            item(Track::new("b", "Closer", 180, 130), 192),
        ];
        let entries = derive_timestamps(&sequence);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[0].timestamp, "00:00");
        assert_eq!(entries[0].artist, "DJ One");
        assert_eq!(entries[1].position, 2);
        assert_eq!(entries[1].timestamp, "03:12");
        assert_eq!(entries[1].title, "Closer");
        assert_eq!(entries[1].artist, "Unknown");
        assert_eq!(entries[1].bpm, 130);
    }

    #[test]
    fn empty_sequence() {
        assert!(derive_timestamps(&[]).is_empty());
    }
}
