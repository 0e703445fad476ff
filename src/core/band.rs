//! Support-band classification and segment thresholds.
//!
//! A support score is a number conventionally in `0.0..=1.0` (0.0 disputes,
//! 1.0 supports).  Scores outside that range are accepted and saturate
//! through the threshold logic rather than erroring.

// ───────────────────────────────────────── thresholds ────────

/// Number of cells in the indicator strip.
pub const SEGMENT_COUNT: usize = 5;

/// Scores below this are classified [`SupportBand::Low`].
pub const MID_THRESHOLD: f64 = 0.4;

/// Scores at or above this are classified [`SupportBand::High`].
pub const HIGH_THRESHOLD: f64 = 0.6;

// ───────────────────────────────────────── band ──────────────

/// One of the three bands a support score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportBand {
    Low,
    Mid,
    High,
}

impl SupportBand {
    /// Classify a score into exactly one band.
    pub fn from_score(score: f64) -> Self {
        if score < MID_THRESHOLD {
            SupportBand::Low
        } else if score < HIGH_THRESHOLD {
            SupportBand::Mid
        } else {
            SupportBand::High
        }
    }

    /// Index of the caption this band emphasizes (0 = low, 1 = mid, 2 = high).
    pub fn caption_index(self) -> usize {
        match self {
            SupportBand::Low => 0,
            SupportBand::Mid => 1,
            SupportBand::High => 2,
        }
    }
}

// ───────────────────────────────────────── segments ──────────

/// Whether segment `i` (0-based, left to right) is lit for `score`.
///
/// Segment 0 is always lit; segments 1–4 light up once the score reaches
/// `i / 5` (0.2, 0.4, 0.6, 0.8).  The lit count follows these quintile
/// thresholds while the segment *colour* follows the coarser band, so a
/// 0.45 score lights three segments, all in the mid colour.
pub fn segment_lit(score: f64, i: usize) -> bool {
    i == 0 || score >= i as f64 / SEGMENT_COUNT as f64
}

/// Lit/unlit state for the whole strip.  Lit segments always form a
/// prefix because the thresholds grow with the index.
pub fn lit_segments(score: f64) -> [bool; SEGMENT_COUNT] {
    std::array::from_fn(|i| segment_lit(score, i))
}

/// Number of lit segments for `score`.
pub fn lit_count(score: f64) -> usize {
    lit_segments(score).iter().filter(|&&lit| lit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(SupportBand::from_score(0.0), SupportBand::Low);
        assert_eq!(SupportBand::from_score(0.39), SupportBand::Low);
        assert_eq!(SupportBand::from_score(0.4), SupportBand::Mid);
        assert_eq!(SupportBand::from_score(0.59), SupportBand::Mid);
        assert_eq!(SupportBand::from_score(0.6), SupportBand::High);
        assert_eq!(SupportBand::from_score(1.0), SupportBand::High);
    }

    #[test]
    fn band_saturates_out_of_range() {
        assert_eq!(SupportBand::from_score(-2.5), SupportBand::Low);
        assert_eq!(SupportBand::from_score(7.0), SupportBand::High);
    }

    #[test]
    fn caption_index_follows_band() {
        assert_eq!(SupportBand::from_score(0.1).caption_index(), 0);
        assert_eq!(SupportBand::from_score(0.45).caption_index(), 1);
        assert_eq!(SupportBand::from_score(0.8).caption_index(), 2);
    }

    #[test]
    fn zero_score_lights_only_first_segment() {
        assert_eq!(lit_segments(0.0), [true, false, false, false, false]);
    }

    #[test]
    fn first_segment_always_lit() {
        assert!(segment_lit(-1.0, 0));
        assert_eq!(lit_segments(-1.0), [true, false, false, false, false]);
    }

    #[test]
    fn mid_score_lights_three_segments() {
        // 0.45 clears 0/5, 1/5 and 2/5 but not 3/5.
        assert_eq!(lit_segments(0.45), [true, true, true, false, false]);
        assert_eq!(lit_count(0.45), 3);
    }

    #[test]
    fn full_score_lights_all_segments() {
        assert_eq!(lit_segments(1.0), [true; 5]);
    }

    #[test]
    fn exact_quintile_boundary_is_lit() {
        // 0.8 ≥ 4/5 exactly, so the last segment lights.
        assert_eq!(lit_segments(0.8), [true; 5]);
        assert_eq!(lit_segments(0.79), [true, true, true, true, false]);
    }

    #[test]
    fn above_one_lights_all_segments() {
        assert_eq!(lit_segments(3.0), [true; 5]);
    }
}
