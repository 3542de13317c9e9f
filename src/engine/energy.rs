//! Position-based energy curve.
//!
//! Energy ramps from 0.3 up to 1.0 over the first 60% of the sequence, then
//! eases down towards 0.6.

/// Fraction of the sequence at which energy peaks.
pub const PEAK_FRACTION: f64 = 0.6;

/// Energy of the first track.
pub const START_ENERGY: f64 = 0.3;

/// Energy lost between the peak and the end of the sequence.
pub const DECAY_SPAN: f64 = 0.4;

/// Returned whenever the curve is undefined at the given position.
pub const FALLBACK_ENERGY: f64 = 1.0;

/// Returns the energy of the track at zero-based `index` in a sequence of `total` tracks.
///
/// Never panics and never returns NaN: a degenerate peak or tail yields
/// [`FALLBACK_ENERGY`].
pub fn energy_at(index: usize, total: usize) -> f64 {
    if total == 0 {
        return FALLBACK_ENERGY;
    }

    let n = total as f64;
    let i = index as f64;
    let peak = n * PEAK_FRACTION;

    let value = if i < peak {
        if peak <= 0.0 {
            return FALLBACK_ENERGY;
        }
        START_ENERGY + (i / peak) * (1.0 - START_ENERGY)
    } else {
        let remaining = n - peak;
        if remaining <= 0.0 {
            return FALLBACK_ENERGY;
        }
        let current = i - peak;
        1.0 - (current / remaining) * DECAY_SPAN
    };

    if value.is_finite() {
        value
    } else {
        FALLBACK_ENERGY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ramps_then_decays() {
        // n = 10: peak at 6.0
        assert!((energy_at(0, 10) - 0.3).abs() < EPS);
        assert!((energy_at(3, 10) - 0.65).abs() < EPS);
        assert!((energy_at(6, 10) - 1.0).abs() < EPS);
        assert!((energy_at(8, 10) - 0.8).abs() < EPS);
        assert!(energy_at(9, 10) > 0.6);
    }

    #[test]
    fn single_track() {
        // peak 0.6, index 0 is still on the ramp
        assert!((energy_at(0, 1) - 0.3).abs() < EPS);
    }

    #[test]
    fn degenerate_inputs_fall_back() {
        assert_eq!(energy_at(0, 0), FALLBACK_ENERGY);
        assert_eq!(energy_at(5, 0), FALLBACK_ENERGY);
    }

    #[test]
    fn stays_in_unit_interval() {
        for n in 1..=200 {
            for i in 0..n {
                let e = energy_at(i, n);
                assert!(!e.is_nan(), "NaN at i={i} n={n}");
                assert!((0.0..=1.0).contains(&e), "{e} out of range at i={i} n={n}");
            }
        }
    }

    #[test]
    fn peaks_near_sixty_percent() {
        let n = 20;
        let max_index = (0..n)
            .max_by(|a, b| energy_at(*a, n).total_cmp(&energy_at(*b, n)))
            .unwrap();
        assert_eq!(max_index, 12);
    }
}
