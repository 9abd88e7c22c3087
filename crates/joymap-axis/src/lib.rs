//! Joystick axis to key / mouse event engine
//!
//! Each analog axis gets an [`AxisEngine`] that turns raw samples and
//! periodic ticks into [`FakeEvent`]s:
//!
//! - **ZeroOne** axes press a key past the dead zone and release it inside,
//!   synchronously with each sample.
//! - **Gradient** axes subscribe to ticks while active. Digital modes repeat
//!   their key with a duty cycle proportional to deflection; mouse modes move
//!   the pointer by a curve-shaped, error-diffused distance each tick.
//! - **Absolute** axes place the pointer at a curve-shaped offset.
//!
//! Engines own no timer and no output device. Events go to an [`EventSink`]
//! and tick subscriptions to a [`TickScheduler`], both supplied by the caller.
//! [`AxisProfile`] bundles the engines of one device with a [`TickSet`].
//!
//! # Example
//!
//! ```
//! use joymap_axis::{AxisConfig, AxisEngine, EngineLimits, FakeEvent, KeyBinding, TickSet};
//!
//! let config = AxisConfig {
//!     positive: KeyBinding::key(30),
//!     negative: KeyBinding::key(31),
//!     ..AxisConfig::default()
//! };
//! let mut engine = AxisEngine::new(0, config, EngineLimits::default());
//! let mut events = Vec::new();
//! let mut ticks = TickSet::new();
//!
//! for raw in [0, 5000, 2000] {
//!     engine.jsevent(raw, &mut events, &mut ticks);
//! }
//! assert_eq!(events, vec![FakeEvent::KeyDown { code: 30 }, FakeEvent::KeyUp { code: 30 }]);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod accumulator;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod limits;
pub mod mode;
pub mod prelude;
pub mod profile;
pub mod tick;

pub use accumulator::DistanceAccumulator;
pub use codec::{AxisLine, read_line, write_line};
pub use config::{AxisConfig, BindingTarget, KeyBinding};
pub use engine::{AxisEngine, AxisRuntime};
pub use error::{ConfigParseError, LimitsError, ProfileError, ProfileResult};
pub use event::{EventSink, FakeEvent};
pub use limits::EngineLimits;
pub use mode::{AxisMode, Interpretation, KeyThreshold, MouseAxis, MouseDirection, ThrottleBias};
pub use profile::AxisProfile;
pub use tick::{MAX_AXES, TickScheduler, TickSet};

pub use joymap_curves::{TransferCurve, ZoneRange};
