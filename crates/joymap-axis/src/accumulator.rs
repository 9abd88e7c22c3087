//! Error-diffusion accumulator for fractional per-tick distances.

/// Carries the rounding residue of each tick into the next one.
///
/// `push` adds a fractional distance and returns the whole pixels to emit,
/// keeping the leftover. Speeds below one pixel per tick therefore still move
/// the pointer over time, and the total emitted after `n` pushes stays within
/// one pixel of the exact sum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceAccumulator {
    residual: f64,
}

impl DistanceAccumulator {
    pub const fn new() -> Self {
        Self { residual: 0.0 }
    }

    /// Add `distance` and take out the rounded whole part.
    ///
    /// Non-finite distances are ignored.
    pub fn push(&mut self, distance: f64) -> i32 {
        if !distance.is_finite() {
            return 0;
        }
        self.residual += distance;
        let emitted = self.residual.round();
        self.residual -= emitted;
        // `as` saturates for out-of-range floats
        emitted as i32
    }

    /// Leftover fraction, always within `[-0.5, 0.5]`.
    pub fn residual(&self) -> f64 {
        self.residual
    }

    pub fn reset(&mut self) {
        self.residual = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_distances_pass_through() {
        let mut acc = DistanceAccumulator::new();
        assert_eq!(acc.push(5.0), 5);
        assert_eq!(acc.push(-3.0), -3);
        assert!(acc.residual().abs() < 1e-12);
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let mut acc = DistanceAccumulator::new();
        assert_eq!(acc.push(19.75), 20);
        assert!((acc.residual() + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_sub_pixel_speed_accumulates() {
        let mut acc = DistanceAccumulator::new();
        let total: i32 = (0..10).map(|_| acc.push(0.3)).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_negative_sub_pixel_speed() {
        let mut acc = DistanceAccumulator::new();
        let total: i32 = (0..8).map(|_| acc.push(-0.25)).sum();
        assert_eq!(total, -2);
    }

    #[test]
    fn test_non_finite_ignored() {
        let mut acc = DistanceAccumulator::new();
        assert_eq!(acc.push(0.4), 0);
        assert_eq!(acc.push(f64::NAN), 0);
        assert_eq!(acc.push(f64::INFINITY), 0);
        assert!((acc.residual() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut acc = DistanceAccumulator::new();
        acc.push(0.4);
        acc.reset();
        assert_eq!(acc, DistanceAccumulator::default());
    }
}
