//! Supported transfer curves.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};
use crate::{EXTREME_BOOST, EXTREME_KNEE, SENSITIVITY_CEILING, SENSITIVITY_EPSILON};

/// Shape applied to a normalized deflection before it is scaled by the
/// axis' maximum speed.
///
/// Serialized profiles refer to curves by their numeric index (see
/// [`TransferCurve::index`]); the order is part of the file format.
///
/// # Example
///
/// ```
/// use joymap_curves::TransferCurve;
///
/// let curve = TransferCurve::from_index(2)?;
/// assert_eq!(curve, TransferCurve::Cubic);
/// assert!((curve.evaluate(0.5, 1.0) - 0.125).abs() < 1e-6);
/// # Ok::<(), joymap_curves::CurveError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TransferCurve {
    /// f(u) = u
    Linear,

    /// f(u) = u²
    #[default]
    Quadratic,

    /// f(u) = u³
    Cubic,

    /// f(u) = u², multiplied by 1.5 once u reaches 0.95.
    ///
    /// This is the only curve whose output can exceed 1.
    QuadraticExtreme,

    /// f(u) = u^(1/sensitivity), clamped to `[0,1]`.
    PowerFunction,
}

impl TransferCurve {
    /// All curves in index order.
    pub const ALL: [TransferCurve; 5] = [
        TransferCurve::Linear,
        TransferCurve::Quadratic,
        TransferCurve::Cubic,
        TransferCurve::QuadraticExtreme,
        TransferCurve::PowerFunction,
    ];

    /// Highest valid serialized index.
    pub const MAX_INDEX: u8 = 4;

    /// Numeric index used by the profile text format.
    pub const fn index(self) -> u8 {
        match self {
            TransferCurve::Linear => 0,
            TransferCurve::Quadratic => 1,
            TransferCurve::Cubic => 2,
            TransferCurve::QuadraticExtreme => 3,
            TransferCurve::PowerFunction => 4,
        }
    }

    /// Look up a curve by its serialized index.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnknownCurve`] when `index` is outside
    /// `0..=MAX_INDEX`.
    pub fn from_index(index: i64) -> CurveResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CurveError::UnknownCurve {
                index,
                max: Self::MAX_INDEX,
            })
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            TransferCurve::Linear => "Linear",
            TransferCurve::Quadratic => "Quadratic",
            TransferCurve::Cubic => "Cubic",
            TransferCurve::QuadraticExtreme => "Quadratic Extreme",
            TransferCurve::PowerFunction => "Power Function",
        }
    }

    /// Whether the sensitivity parameter affects this curve.
    pub const fn uses_sensitivity(self) -> bool {
        matches!(self, TransferCurve::PowerFunction)
    }

    /// Evaluate the curve at normalized deflection `u`.
    ///
    /// `u` is clamped to `[0,1]` (NaN is treated as 0). `sensitivity` is only
    /// read by [`TransferCurve::PowerFunction`], where it is clamped to
    /// `[SENSITIVITY_EPSILON, SENSITIVITY_CEILING]` before inversion so the
    /// exponent stays finite.
    pub fn evaluate(self, u: f32, sensitivity: f32) -> f32 {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };

        match self {
            TransferCurve::Linear => u,
            TransferCurve::Quadratic => u * u,
            TransferCurve::Cubic => u * u * u,
            TransferCurve::QuadraticExtreme => {
                let v = u * u;
                if u >= EXTREME_KNEE { v * EXTREME_BOOST } else { v }
            }
            TransferCurve::PowerFunction => {
                let s = if sensitivity.is_nan() {
                    1.0
                } else {
                    sensitivity.clamp(SENSITIVITY_EPSILON, SENSITIVITY_CEILING)
                };
                let v = u.powf(1.0 / s);
                if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
            }
        }
    }
}

impl std::fmt::Display for TransferCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        let curve = TransferCurve::Linear;
        for i in 0..=10 {
            let u = i as f32 / 10.0;
            assert!((curve.evaluate(u, 1.0) - u).abs() < 1e-6);
        }
    }

    #[test]
    fn test_quadratic_and_cubic() {
        assert!((TransferCurve::Quadratic.evaluate(0.5, 1.0) - 0.25).abs() < 1e-6);
        assert!((TransferCurve::Cubic.evaluate(0.5, 1.0) - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_extreme_below_knee() {
        let u = 0.9;
        let v = TransferCurve::QuadraticExtreme.evaluate(u, 1.0);
        assert!((v - 0.81).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_extreme_at_knee_and_saturation() {
        let at_knee = TransferCurve::QuadraticExtreme.evaluate(0.95, 1.0);
        assert!((at_knee - 0.95 * 0.95 * 1.5).abs() < 1e-5);

        let full = TransferCurve::QuadraticExtreme.evaluate(1.0, 1.0);
        assert!((full - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_power_function_sensitivity() {
        // sensitivity 2 -> square root
        let v = TransferCurve::PowerFunction.evaluate(0.25, 2.0);
        assert!((v - 0.5).abs() < 1e-5);

        // sensitivity 1 -> linear
        let v = TransferCurve::PowerFunction.evaluate(0.3, 1.0);
        assert!((v - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_power_function_extreme_sensitivity_stays_finite() {
        for s in [0.0, -5.0, 1e-20, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let v = TransferCurve::PowerFunction.evaluate(0.5, s);
            assert!(v.is_finite(), "sensitivity {s} gave {v}");
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for curve in TransferCurve::ALL {
            assert!(curve.evaluate(-3.0, 1.0).abs() < 1e-6);
            assert!(curve.evaluate(f32::NAN, 1.0).abs() < 1e-6);
            let hi = curve.evaluate(7.0, 1.0);
            let one = curve.evaluate(1.0, 1.0);
            assert!((hi - one).abs() < 1e-6);
        }
    }

    #[test]
    fn test_index_roundtrip() -> Result<(), CurveError> {
        for curve in TransferCurve::ALL {
            assert_eq!(TransferCurve::from_index(i64::from(curve.index()))?, curve);
        }
        Ok(())
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert!(matches!(
            TransferCurve::from_index(5),
            Err(CurveError::UnknownCurve { index: 5, max: 4 })
        ));
        assert!(TransferCurve::from_index(-1).is_err());
    }

    #[test]
    fn test_default_is_quadratic() {
        assert_eq!(TransferCurve::default(), TransferCurve::Quadratic);
    }

    #[test]
    fn test_only_power_function_uses_sensitivity() {
        let users: Vec<_> = TransferCurve::ALL
            .iter()
            .filter(|c| c.uses_sensitivity())
            .collect();
        assert_eq!(users, vec![&TransferCurve::PowerFunction]);
    }

    #[test]
    fn test_serde_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&TransferCurve::QuadraticExtreme)?;
        let back: TransferCurve = serde_json::from_str(&json)?;
        assert_eq!(back, TransferCurve::QuadraticExtreme);
        Ok(())
    }
}
