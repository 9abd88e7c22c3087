//! Device-wide limits shared by every axis engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LimitsError;

/// Lowest raw sample a device reports.
pub const JOY_MIN: i32 = -32767;

/// Highest raw sample a device reports.
pub const JOY_MAX: i32 = 32767;

/// Highest key code an axis may be bound to.
pub const MAX_KEY: u16 = 255;

/// Ceiling for an axis' mouse speed, in pixels per tick.
pub const MAX_MOUSE_SPEED: i32 = 5000;

/// Ticks per second delivered to gradient axes.
pub const TICK_FREQUENCY: u32 = 10;

/// Lowest accepted sensitivity.
pub const SENSITIVITY_MIN: f32 = 1e-8;

/// Highest accepted sensitivity.
pub const SENSITIVITY_MAX: f32 = 1e7;

/// Limits every engine is constructed with.
///
/// These are passed explicitly instead of being read from process-wide
/// definitions, so two devices with different ranges can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineLimits {
    /// Lowest raw sample value.
    pub joy_min: i32,
    /// Highest raw sample value.
    pub joy_max: i32,
    /// Highest bindable key / button code.
    pub max_key: u16,
    /// Ceiling for `max_speed`.
    pub max_mouse_speed: i32,
    /// Ticks per second; also the length of one duty-cycle window in ticks.
    pub tick_frequency: u32,
    /// Lowest accepted sensitivity.
    pub sensitivity_min: f32,
    /// Highest accepted sensitivity.
    pub sensitivity_max: f32,
    /// How far below the dead zone a magnitude must fall before an active
    /// axis turns off. Zero keeps a single threshold.
    pub hysteresis: i32,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            joy_min: JOY_MIN,
            joy_max: JOY_MAX,
            max_key: MAX_KEY,
            max_mouse_speed: MAX_MOUSE_SPEED,
            tick_frequency: TICK_FREQUENCY,
            sensitivity_min: SENSITIVITY_MIN,
            sensitivity_max: SENSITIVITY_MAX,
            hysteresis: 0,
        }
    }
}

impl EngineLimits {
    /// Period between two ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_frequency.max(1)))
    }

    /// Check that the limits describe a usable device.
    ///
    /// # Errors
    ///
    /// Returns the first [`LimitsError`] found.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.joy_min >= self.joy_max || self.joy_max <= 0 {
            return Err(LimitsError::EmptySampleRange {
                min: self.joy_min,
                max: self.joy_max,
            });
        }
        if self.tick_frequency == 0 {
            return Err(LimitsError::ZeroTickFrequency);
        }
        if !(self.sensitivity_min.is_finite()
            && self.sensitivity_max.is_finite()
            && self.sensitivity_min > 0.0
            && self.sensitivity_min <= self.sensitivity_max)
        {
            return Err(LimitsError::InvalidSensitivityBounds {
                min: self.sensitivity_min,
                max: self.sensitivity_max,
            });
        }
        if self.max_mouse_speed < 0 {
            return Err(LimitsError::NegativeMouseSpeed(self.max_mouse_speed));
        }
        if self.hysteresis < 0 {
            return Err(LimitsError::NegativeHysteresis(self.hysteresis));
        }
        Ok(())
    }

    /// Replace any unusable field with its default so engine arithmetic stays
    /// total. Valid limits are returned unchanged.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut out = self;
        if out.joy_min >= out.joy_max || out.joy_max <= 0 {
            out.joy_min = defaults.joy_min;
            out.joy_max = defaults.joy_max;
        }
        if out.tick_frequency == 0 {
            out.tick_frequency = defaults.tick_frequency;
        }
        if !(out.sensitivity_min.is_finite()
            && out.sensitivity_max.is_finite()
            && out.sensitivity_min > 0.0
            && out.sensitivity_min <= out.sensitivity_max)
        {
            out.sensitivity_min = defaults.sensitivity_min;
            out.sensitivity_max = defaults.sensitivity_max;
        }
        out.max_mouse_speed = out.max_mouse_speed.max(0);
        out.hysteresis = out.hysteresis.max(0);
        out
    }
}
