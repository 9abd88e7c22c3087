//! Dead zone / extreme zone normalization.

use serde::{Deserialize, Serialize};

use crate::transfer::TransferCurve;

/// The active band of an axis, between the dead zone and the extreme zone.
///
/// Holds the precomputed `1 / (extreme - dead)` so the tick path only
/// multiplies. A degenerate band (`extreme <= dead`) is clamped to a width of
/// one unit instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneRange {
    dead_zone: i32,
    extreme_zone: i32,
    inverse_range: f32,
}

impl ZoneRange {
    /// Build a band from raw dead / extreme zone magnitudes.
    pub fn new(dead_zone: i32, extreme_zone: i32) -> Self {
        let width = i64::from(extreme_zone) - i64::from(dead_zone);
        let inverse_range = 1.0 / width.max(1) as f32;
        Self {
            dead_zone,
            extreme_zone,
            inverse_range,
        }
    }

    /// Magnitude below which the axis is neutral.
    pub fn dead_zone(&self) -> i32 {
        self.dead_zone
    }

    /// Magnitude at which the output saturates.
    pub fn extreme_zone(&self) -> i32 {
        self.extreme_zone
    }

    /// `1 / (extreme - dead)`, with the denominator clamped to at least 1.
    pub fn inverse_range(&self) -> f32 {
        self.inverse_range
    }

    /// True when the extreme zone does not lie above the dead zone.
    pub fn is_degenerate(&self) -> bool {
        self.extreme_zone <= self.dead_zone
    }

    /// Map an absolute axis magnitude to `u ∈ [0,1]`.
    ///
    /// The extreme zone wins over the dead zone when the band is degenerate.
    pub fn normalize(&self, magnitude: i32) -> f32 {
        let magnitude = magnitude.saturating_abs();
        if magnitude >= self.extreme_zone {
            1.0
        } else if magnitude <= self.dead_zone {
            0.0
        } else {
            let offset = i64::from(magnitude) - i64::from(self.dead_zone);
            (self.inverse_range * offset as f32).clamp(0.0, 1.0)
        }
    }

    /// Normalize `magnitude` and shape it with `curve`.
    pub fn shape(&self, magnitude: i32, curve: TransferCurve, sensitivity: f32) -> f32 {
        curve.evaluate(self.normalize(magnitude), sensitivity)
    }
}

impl Default for ZoneRange {
    fn default() -> Self {
        Self::new(3000, 30000)
    }
}
