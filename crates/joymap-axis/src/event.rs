//! Synthetic events produced by the axis engine.
//!
//! An engine never talks to the operating system. It hands [`FakeEvent`]s to
//! an [`EventSink`], and whoever owns the sink injects them (uinput, SendInput,
//! a test buffer, ...).
//!
//! ## Value conventions
//! - Key and mouse-button codes are the raw codes the sink understands and are
//!   bounded by `EngineLimits::max_key`.
//! - Relative moves are pixel deltas for one tick.
//! - Absolute moves are offsets from the pointer anchor chosen by the sink;
//!   the coordinate an axis does not drive is always 0.

use serde::{Deserialize, Serialize};

/// One synthetic input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FakeEvent {
    /// A key transitioned to pressed.
    KeyDown { code: u16 },

    /// A key transitioned to released.
    KeyUp { code: u16 },

    /// A mouse button transitioned to pressed.
    MouseButtonDown { button: u16 },

    /// A mouse button transitioned to released.
    MouseButtonUp { button: u16 },

    /// Move the pointer by a delta.
    MouseMoveRelative { dx: i32, dy: i32 },

    /// Place the pointer at an offset from its anchor.
    MouseMoveAbsolute { x: i32, y: i32 },
}

impl FakeEvent {
    /// True for `KeyDown` and `MouseButtonDown`.
    pub fn is_press(&self) -> bool {
        matches!(
            self,
            FakeEvent::KeyDown { .. } | FakeEvent::MouseButtonDown { .. }
        )
    }

    /// True for `KeyUp` and `MouseButtonUp`.
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            FakeEvent::KeyUp { .. } | FakeEvent::MouseButtonUp { .. }
        )
    }

    /// Key or button code, for press/release events.
    pub fn code(&self) -> Option<u16> {
        match *self {
            FakeEvent::KeyDown { code } | FakeEvent::KeyUp { code } => Some(code),
            FakeEvent::MouseButtonDown { button } | FakeEvent::MouseButtonUp { button } => {
                Some(button)
            }
            FakeEvent::MouseMoveRelative { .. } | FakeEvent::MouseMoveAbsolute { .. } => None,
        }
    }
}

impl std::fmt::Display for FakeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FakeEvent::KeyDown { code } => write!(f, "KeyDown({code})"),
            FakeEvent::KeyUp { code } => write!(f, "KeyUp({code})"),
            FakeEvent::MouseButtonDown { button } => write!(f, "MouseButtonDown({button})"),
            FakeEvent::MouseButtonUp { button } => write!(f, "MouseButtonUp({button})"),
            FakeEvent::MouseMoveRelative { dx, dy } => write!(f, "MouseMoveRelative({dx}, {dy})"),
            FakeEvent::MouseMoveAbsolute { x, y } => write!(f, "MouseMoveAbsolute({x}, {y})"),
        }
    }
}

/// Consumer of emitted events.
///
/// Implementations must not block: `send` is called from the sample and tick
/// paths.
pub trait EventSink {
    fn send(&mut self, event: FakeEvent);
}

impl EventSink for Vec<FakeEvent> {
    fn send(&mut self, event: FakeEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_classification() {
        assert!(FakeEvent::KeyDown { code: 1 }.is_press());
        assert!(FakeEvent::MouseButtonDown { button: 1 }.is_press());
        assert!(FakeEvent::KeyUp { code: 1 }.is_release());
        assert!(FakeEvent::MouseButtonUp { button: 1 }.is_release());

        let motion = FakeEvent::MouseMoveRelative { dx: 1, dy: 0 };
        assert!(!motion.is_press());
        assert!(!motion.is_release());
        assert_eq!(motion.code(), None);
    }

    #[test]
    fn test_code() {
        assert_eq!(FakeEvent::KeyUp { code: 38 }.code(), Some(38));
        assert_eq!(FakeEvent::MouseButtonDown { button: 3 }.code(), Some(3));
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<FakeEvent> = Vec::new();
        sink.send(FakeEvent::KeyDown { code: 30 });
        sink.send(FakeEvent::KeyUp { code: 30 });
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(FakeEvent::KeyDown { code: 30 }.to_string(), "KeyDown(30)");
        assert_eq!(
            FakeEvent::MouseMoveRelative { dx: -3, dy: 0 }.to_string(),
            "MouseMoveRelative(-3, 0)"
        );
    }

    #[test]
    fn test_json_is_tagged() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&FakeEvent::KeyDown { code: 30 })?;
        assert_eq!(json, r#"{"type":"KeyDown","code":30}"#);
        Ok(())
    }
}
