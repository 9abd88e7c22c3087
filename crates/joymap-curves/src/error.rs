//! Error types for curve operations.

use thiserror::Error;

/// Error type for curve selection and parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A serialized curve index does not name a known curve.
    #[error("Unknown transfer curve index {index} (expected 0..={max})")]
    UnknownCurve {
        /// The rejected index.
        index: i64,
        /// Highest valid index.
        max: u8,
    },
}

/// Result alias for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_curve() {
        let err = CurveError::UnknownCurve { index: 9, max: 4 };
        let msg = err.to_string();
        assert!(msg.contains("index 9"));
        assert!(msg.contains("0..=4"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = CurveError::UnknownCurve { index: -1, max: 4 };
        let _: &dyn std::error::Error = &err;
    }
}
