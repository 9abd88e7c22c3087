//! Axis interpretation and output mode descriptors.

use serde::{Deserialize, Serialize};

/// How the deflection is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interpretation {
    /// Binary: on past the dead zone, off otherwise. Handled synchronously
    /// with each sample.
    #[default]
    ZeroOne,
    /// Continuous: output scales with deflection, driven by ticks.
    Gradient,
    /// Continuous, with mouse output as a position instead of a delta.
    AbsolutePosition,
}

impl Interpretation {
    /// Whether the axis needs periodic ticks while active.
    pub const fn uses_timer(self) -> bool {
        !matches!(self, Interpretation::ZeroOne)
    }

    /// Canonical profile token.
    pub const fn token(self) -> &'static str {
        match self {
            Interpretation::ZeroOne => "ZeroOne",
            Interpretation::Gradient => "Gradient",
            Interpretation::AbsolutePosition => "Absolute",
        }
    }

    /// Parse a lower-cased profile token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "zeroone" => Some(Interpretation::ZeroOne),
            "gradient" => Some(Interpretation::Gradient),
            "absolute" => Some(Interpretation::AbsolutePosition),
            _ => None,
        }
    }
}

/// Collapses a bidirectional reading into one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ThrottleBias {
    /// Only the negative half: a raw `joy_max` becomes neutral (0) and a raw
    /// `joy_min` full negative deflection.
    NegativeOnly,
    /// Plain bidirectional axis.
    #[default]
    None,
    /// Only the positive half: a raw `joy_min` becomes neutral (0) and a raw
    /// `joy_max` full positive deflection.
    PositiveOnly,
}

impl ThrottleBias {
    /// Apply the bias to a raw sample in `[joy_min, joy_max]`.
    pub fn apply(self, raw: i32, joy_min: i32, joy_max: i32) -> i32 {
        let shifted = match self {
            ThrottleBias::None => return raw,
            ThrottleBias::NegativeOnly => (i64::from(raw) + i64::from(joy_min)) / 2,
            ThrottleBias::PositiveOnly => (i64::from(raw) + i64::from(joy_max)) / 2,
        };
        i32::try_from(shifted).unwrap_or(if shifted < 0 { i32::MIN } else { i32::MAX })
    }

    /// Profile token, `None` for a plain axis.
    pub const fn token(self) -> Option<&'static str> {
        match self {
            ThrottleBias::NegativeOnly => Some("throttle-"),
            ThrottleBias::None => None,
            ThrottleBias::PositiveOnly => Some("throttle+"),
        }
    }
}

/// Pointer axis driven by an analog axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseDirection {
    Horizontal,
    Vertical,
}

/// Pointer axis plus optional sign reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MouseAxis {
    pub direction: MouseDirection,
    pub reversed: bool,
}

impl MouseAxis {
    pub const fn new(direction: MouseDirection, reversed: bool) -> Self {
        Self {
            direction,
            reversed,
        }
    }

    /// Split a signed distance into `(dx, dy)`.
    pub fn displacement(self, distance: i32) -> (i32, i32) {
        let d = if self.reversed {
            distance.saturating_neg()
        } else {
            distance
        };
        match self.direction {
            MouseDirection::Horizontal => (d, 0),
            MouseDirection::Vertical => (0, d),
        }
    }
}

/// Deflection a compound axis needs before its key engages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeyThreshold {
    /// Key only at full deflection.
    #[default]
    ExtremeZone,
    /// Key as soon as the axis leaves the dead zone.
    DeadZone,
}

impl KeyThreshold {
    pub const fn token(self) -> &'static str {
        match self {
            KeyThreshold::ExtremeZone => "xzone",
            KeyThreshold::DeadZone => "dzone",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "xzone" => Some(KeyThreshold::ExtremeZone),
            "dzone" => Some(KeyThreshold::DeadZone),
            _ => None,
        }
    }
}

/// What an axis drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisMode {
    /// Keys or mouse buttons only, edge triggered.
    #[default]
    Digital,
    /// Pointer motion only.
    Mouse(MouseAxis),
    /// Pointer motion on every step, plus a key past `threshold`.
    Compound {
        axis: MouseAxis,
        threshold: KeyThreshold,
    },
}

impl AxisMode {
    /// Pointer axis for modes that move the mouse.
    pub const fn mouse_axis(self) -> Option<MouseAxis> {
        match self {
            AxisMode::Digital => None,
            AxisMode::Mouse(axis) | AxisMode::Compound { axis, .. } => Some(axis),
        }
    }

    /// Whether the axis' key bindings are used.
    pub const fn uses_keys(self) -> bool {
        !matches!(self, AxisMode::Mouse(_))
    }

    /// Canonical profile token.
    pub const fn token(self) -> &'static str {
        use MouseDirection::{Horizontal, Vertical};
        match self {
            AxisMode::Digital => "keyboard",
            AxisMode::Mouse(MouseAxis { direction: Vertical, reversed: false }) => "mouse+v",
            AxisMode::Mouse(MouseAxis { direction: Vertical, reversed: true }) => "mouse-v",
            AxisMode::Mouse(MouseAxis { direction: Horizontal, reversed: false }) => "mouse+h",
            AxisMode::Mouse(MouseAxis { direction: Horizontal, reversed: true }) => "mouse-h",
            AxisMode::Compound { axis, .. } => match (axis.direction, axis.reversed) {
                (Horizontal, false) => "keyboardandmousehor",
                (Horizontal, true) => "keyboardandmousehorrev",
                (Vertical, false) => "keyboardandmousevert",
                (Vertical, true) => "keyboardandmousevertrev",
            },
        }
    }

    /// Parse a lower-cased mode token. Compound modes come back with the
    /// default threshold.
    pub fn from_token(token: &str) -> Option<Self> {
        use MouseDirection::{Horizontal, Vertical};
        let mode = match token {
            "keyboard" => AxisMode::Digital,
            "mouse+v" | "mouseposvert" => AxisMode::Mouse(MouseAxis::new(Vertical, false)),
            "mouse-v" | "mousenegvert" => AxisMode::Mouse(MouseAxis::new(Vertical, true)),
            "mouse+h" | "mouseposhor" => AxisMode::Mouse(MouseAxis::new(Horizontal, false)),
            "mouse-h" | "mouseneghor" => AxisMode::Mouse(MouseAxis::new(Horizontal, true)),
            "keyboardandmousehor" => compound(Horizontal, false),
            "keyboardandmousehorrev" => compound(Horizontal, true),
            "keyboardandmousevert" => compound(Vertical, false),
            "keyboardandmousevertrev" => compound(Vertical, true),
            _ => return None,
        };
        Some(mode)
    }
}

fn compound(direction: MouseDirection, reversed: bool) -> AxisMode {
    AxisMode::Compound {
        axis: MouseAxis::new(direction, reversed),
        threshold: KeyThreshold::default(),
    }
}
