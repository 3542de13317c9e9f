//! Placement of filtered tracks on the mix timeline.

use tracing::{debug, warn};

use super::energy::energy_at;
use crate::types::{MixConfig, SequenceItem, Track};

/// Lays `tracks` out back to back, overlapping each pair by the style's transition.
///
/// The running clock advances by `duration - transition` per track and the walk
/// stops once the clock reaches the target duration. The first item has no
/// transition in and the last *filtered* track has no transition out, even when
/// the duration cap drops it before it is placed. Energy is computed against
/// the full filtered length.
///
/// Transitions longer than a track move the clock backwards; such offsets are
/// kept as they are.
pub fn build_sequence(tracks: &[Track], config: &MixConfig) -> Vec<SequenceItem> {
    let target = config.total_duration_sec();
    let transition = config.mixing_style.transition_length();
    let unit = config.mixing_style.transition_unit();
    let total = tracks.len();

    let mut sequence = Vec::with_capacity(total);
    let mut clock: i64 = 0;

    for (index, track) in tracks.iter().enumerate() {
        if clock >= target {
            debug!(placed = index, dropped = total - index, "target duration reached");
            break;
        }

        let start_sec = clock;
        let end_sec = start_sec + i64::from(track.duration_sec);

        sequence.push(SequenceItem {
            track: track.clone(),
            start_sec,
            end_sec,
            transition_in: if index > 0 { transition } else { 0 },
            transition_out: if index + 1 < total { transition } else { 0 },
            transition_unit: unit,
            energy: energy_at(index, total),
        });

        let advance = i64::from(track.duration_sec) - i64::from(transition);
        if advance < 0 {
            warn!(
                title = %track.title,
                duration_sec = track.duration_sec,
                transition,
                "transition longer than track, clock moves backwards"
            );
        }
        clock += advance;
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MixingStyle, TransitionUnit};

    fn config(minutes: u32, style: MixingStyle) -> MixConfig {
        MixConfig {
            duration_minutes: minutes,
            mixing_style: style,
            ..MixConfig::default()
        }
    }

    fn pool(count: usize, duration_sec: u32) -> Vec<Track> {
        (0..count)
            .map(|i| Track::new(format!("t{i}"), format!("Track {i}"), duration_sec, 125))
            .collect()
    }

    #[test]
    fn crossfaded_interior_transitions() {
        let tracks = pool(10, 200);
        let sequence = build_sequence(&tracks, &config(120, MixingStyle::Crossfaded));
        assert_eq!(sequence.len(), 10);

        assert_eq!(sequence[0].transition_in, 0);
        assert_eq!(sequence[0].transition_out, 8);
        for item in &sequence[1..9] {
            assert_eq!(item.transition_in, 8);
            assert_eq!(item.transition_out, 8);
        }
        assert_eq!(sequence[9].transition_in, 8);
        assert_eq!(sequence[9].transition_out, 0);
        assert!(sequence.iter().all(|i| i.transition_unit == TransitionUnit::Seconds));
    }

    #[test]
    fn offsets_overlap_by_transition() {
        let tracks = pool(3, 200);
        let sequence = build_sequence(&tracks, &config(60, MixingStyle::ReverbWash));
        let starts: Vec<i64> = sequence.iter().map(|i| i.start_sec).collect();
        assert_eq!(starts, vec![0, 184, 368]);
        assert_eq!(sequence[1].end_sec, 384);
    }

    #[test]
    fn beat_matched_uses_beats() {
        let tracks = pool(2, 240);
        let sequence = build_sequence(&tracks, &config(60, MixingStyle::BeatMatched));
        assert_eq!(sequence[1].transition_in, 32);
        assert_eq!(sequence[1].start_sec, 208);
        assert_eq!(sequence[0].transition_unit, TransitionUnit::Beats);
    }

    #[test]
    fn stops_at_target_duration() {
        // 1 minute target, 40 s tracks with 4 s chops: clock 0, 36, 72 -> third is never placed
        let tracks = pool(5, 40);
        let sequence = build_sequence(&tracks, &config(1, MixingStyle::ChoppedEdit));
        assert_eq!(sequence.len(), 2);
        // the cap is not a lookahead: the last placed item still transitions out
        assert_eq!(sequence[1].transition_out, 4);
    }

    #[test]
    fn energy_uses_filtered_length() {
        let tracks = pool(10, 40);
        let sequence = build_sequence(&tracks, &config(1, MixingStyle::ChoppedEdit));
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence[1].energy, energy_at(1, 10));
    }

    #[test]
    fn never_longer_than_input() {
        for count in 0..20 {
            for minutes in [1, 5, 60] {
                let tracks = pool(count, 180);
                let sequence = build_sequence(&tracks, &config(minutes, MixingStyle::Crossfaded));
                assert!(sequence.len() <= tracks.len());
            }
        }
    }

    #[test]
    fn offsets_non_decreasing_when_transitions_are_short() {
        let tracks: Vec<Track> = [200, 17, 95, 240, 33]
            .iter()
            .enumerate()
            .map(|(i, d)| Track::new(format!("t{i}"), "x", *d, 125))
            .collect();
        let sequence = build_sequence(&tracks, &config(60, MixingStyle::ReverbWash));
        assert!(sequence.windows(2).all(|w| w[0].start_sec <= w[1].start_sec));
    }

    #[test]
    fn long_transition_moves_clock_backwards() {
        // 3 s tracks with a 16 s reverb wash: each start is 13 s earlier than the last
        let tracks = pool(3, 3);
        let sequence = build_sequence(&tracks, &config(10, MixingStyle::ReverbWash));
        let starts: Vec<i64> = sequence.iter().map(|i| i.start_sec).collect();
        assert_eq!(starts, vec![0, -13, -26]);
    }

    #[test]
    fn empty_pool() {
        let sequence = build_sequence(&[], &config(30, MixingStyle::Crossfaded));
        assert!(sequence.is_empty());
    }
}
