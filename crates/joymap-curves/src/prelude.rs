//! Convenience re-exports.

pub use crate::error::{CurveError, CurveResult};
pub use crate::transfer::TransferCurve;
pub use crate::zone::ZoneRange;
