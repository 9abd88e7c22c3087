//! Transfer curves for joystick-to-pointer mapping
//!
//! This crate turns an axis deflection into an output magnitude. It is the
//! pure half of the axis engine: no state, no allocation, no I/O.
//!
//! # Overview
//!
//! A raw axis magnitude is first normalized against the dead zone and the
//! extreme zone into `u ∈ [0,1]` (0 at the dead zone, 1 at the extreme zone),
//! then shaped by one of the supported curves:
//!
//! - **Linear**: `u`
//! - **Quadratic**: `u²`
//! - **Cubic**: `u³`
//! - **QuadraticExtreme**: `u²`, boosted ×1.5 once `u ≥ 0.95`
//! - **PowerFunction**: `u^(1/sensitivity)`, clamped to `[0,1]`
//!
//! # RT Safety
//!
//! Every function here is O(1), allocation-free and total over finite and
//! non-finite inputs, so it may be called from the tick path.
//!
//! # Example
//!
//! ```
//! use joymap_curves::{ZoneRange, TransferCurve};
//!
//! let zones = ZoneRange::new(3000, 30000);
//! let u = zones.normalize(15000);
//! let v = TransferCurve::Quadratic.evaluate(u, 1.0);
//! assert!((v * 100.0 - 19.75).abs() < 0.01);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod prelude;
pub mod transfer;
pub mod zone;

pub use error::{CurveError, CurveResult};
pub use transfer::TransferCurve;
pub use zone::ZoneRange;

/// Lower clamp applied to the power-function sensitivity before inversion.
pub const SENSITIVITY_EPSILON: f32 = 1e-8;

/// Upper clamp applied to the power-function sensitivity.
pub const SENSITIVITY_CEILING: f32 = 1e3;

/// Normalized deflection at which QuadraticExtreme starts boosting.
pub const EXTREME_KNEE: f32 = 0.95;

/// Multiplier QuadraticExtreme applies past [`EXTREME_KNEE`].
pub const EXTREME_BOOST: f32 = 1.5;
