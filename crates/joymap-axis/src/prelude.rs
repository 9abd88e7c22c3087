//! Convenience re-exports.

pub use crate::config::{AxisConfig, KeyBinding};
pub use crate::engine::AxisEngine;
pub use crate::error::{ConfigParseError, ProfileError, ProfileResult};
pub use crate::event::{EventSink, FakeEvent};
pub use crate::limits::EngineLimits;
pub use crate::mode::{AxisMode, Interpretation, MouseAxis, MouseDirection, ThrottleBias};
pub use crate::profile::AxisProfile;
pub use crate::tick::{TickScheduler, TickSet};
