//! Per-axis settings.

use joymap_curves::TransferCurve;
use serde::{Deserialize, Serialize};

use crate::event::FakeEvent;
use crate::limits::EngineLimits;
use crate::mode::{AxisMode, Interpretation, ThrottleBias};

/// Default dead zone magnitude.
pub const DEFAULT_DEAD_ZONE: i32 = 3000;

/// Default extreme zone magnitude.
pub const DEFAULT_EXTREME_ZONE: i32 = 30000;

/// Default mouse speed, in pixels per tick at full deflection.
pub const DEFAULT_MAX_SPEED: i32 = 100;

/// What a key binding presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BindingTarget {
    #[default]
    Key,
    MouseButton,
}

/// A key or mouse button bound to one direction of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct KeyBinding {
    pub code: u16,
    pub target: BindingTarget,
}

impl KeyBinding {
    pub const fn key(code: u16) -> Self {
        Self {
            code,
            target: BindingTarget::Key,
        }
    }

    pub const fn mouse_button(button: u16) -> Self {
        Self {
            code: button,
            target: BindingTarget::MouseButton,
        }
    }

    pub const fn is_mouse(&self) -> bool {
        matches!(self.target, BindingTarget::MouseButton)
    }

    /// Event pressing this binding.
    pub const fn press_event(&self) -> FakeEvent {
        match self.target {
            BindingTarget::Key => FakeEvent::KeyDown { code: self.code },
            BindingTarget::MouseButton => FakeEvent::MouseButtonDown { button: self.code },
        }
    }

    /// Event releasing this binding.
    pub const fn release_event(&self) -> FakeEvent {
        match self.target {
            BindingTarget::Key => FakeEvent::KeyUp { code: self.code },
            BindingTarget::MouseButton => FakeEvent::MouseButtonUp { button: self.code },
        }
    }
}

/// Settings of one axis. Created at profile load, otherwise defaulted, and
/// only changed by an editor.
///
/// Fields are public for editors and serialization; engines clamp a config
/// against their [`EngineLimits`] before using it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub interpretation: Interpretation,
    pub mode: AxisMode,
    pub throttle: ThrottleBias,
    pub dead_zone: i32,
    pub extreme_zone: i32,
    pub max_speed: i32,
    pub curve: TransferCurve,
    /// Only read by [`TransferCurve::PowerFunction`].
    pub sensitivity: f32,
    pub positive: KeyBinding,
    pub negative: KeyBinding,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            interpretation: Interpretation::ZeroOne,
            mode: AxisMode::Digital,
            throttle: ThrottleBias::None,
            dead_zone: DEFAULT_DEAD_ZONE,
            extreme_zone: DEFAULT_EXTREME_ZONE,
            max_speed: DEFAULT_MAX_SPEED,
            curve: TransferCurve::Quadratic,
            sensitivity: 1.0,
            positive: KeyBinding::default(),
            negative: KeyBinding::default(),
        }
    }
}

impl AxisConfig {
    /// True when every setting still has its default value.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Bind one direction to a key or mouse button.
    pub fn set_key(&mut self, positive: bool, binding: KeyBinding) {
        if positive {
            self.positive = binding;
        } else {
            self.negative = binding;
        }
    }

    /// Binding pressed for a given axis state: positive above zero, negative
    /// otherwise.
    pub fn binding_for(&self, state: i32) -> KeyBinding {
        if state > 0 { self.positive } else { self.negative }
    }

    /// Pull every field inside `limits`.
    ///
    /// Zones are kept as given even when out of order; the engine clamps the
    /// gradient denominator instead.
    pub fn clamped(mut self, limits: &EngineLimits) -> Self {
        let zone_max = limits.joy_max.max(0);
        self.dead_zone = self.dead_zone.clamp(0, zone_max);
        self.extreme_zone = self.extreme_zone.clamp(0, zone_max);
        self.max_speed = self.max_speed.clamp(0, limits.max_mouse_speed.max(0));
        let sensitivity = if self.sensitivity.is_nan() {
            1.0
        } else {
            self.sensitivity
        };
        // limits are not sanitized here, so bounds may be unordered
        self.sensitivity = sensitivity
            .max(limits.sensitivity_min)
            .min(limits.sensitivity_max);
        self.positive.code = self.positive.code.min(limits.max_key);
        self.negative.code = self.negative.code.min(limits.max_key);
        self
    }

    /// Short label for status displays: `KEYBOARD`, `MOUSE`,
    /// `KEYBOARD/MOUSE` or `THROTTLE`.
    pub fn status_label(&self) -> &'static str {
        match self.mode {
            AxisMode::Digital if self.throttle != ThrottleBias::None => "THROTTLE",
            AxisMode::Digital if self.positive.is_mouse() != self.negative.is_mouse() => {
                "KEYBOARD/MOUSE"
            }
            AxisMode::Digital if self.positive.is_mouse() => "MOUSE",
            AxisMode::Digital => "KEYBOARD",
            AxisMode::Mouse(_) | AxisMode::Compound { .. } => "MOUSE",
        }
    }
}
