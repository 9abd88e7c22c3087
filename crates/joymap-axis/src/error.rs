//! Error types for axis configuration and profiles.

use thiserror::Error;

/// A profile line could not be read.
///
/// Parsing stops at the first bad value; the rest of that line is not read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigParseError {
    #[error("missing value after '{key}'")]
    MissingValue { key: String },

    #[error("invalid number '{value}' for '{key}'")]
    InvalidNumber { key: String, value: String },

    #[error("{key} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        key: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("invalid value '{value}' for '{key}', expected one of: {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl ConfigParseError {
    /// The key token whose value was rejected.
    pub fn key(&self) -> &str {
        match self {
            ConfigParseError::MissingValue { key }
            | ConfigParseError::InvalidNumber { key, .. }
            | ConfigParseError::OutOfRange { key, .. }
            | ConfigParseError::InvalidValue { key, .. } => key,
        }
    }
}

/// A multi-axis profile could not be loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: ConfigParseError,
    },

    #[error("line {line}: missing 'Axis N:' header")]
    MissingHeader { line: usize },

    #[error("line {line}: axis {index} is out of range (profile has {count} axes)")]
    AxisIndexOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },

    #[error("line {line}: axis {index} is defined more than once")]
    DuplicateAxis { line: usize, index: usize },

    #[error("axis {index} does not exist (profile has {count} axes)")]
    NoSuchAxis { index: usize, count: usize },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Engine limits that cannot describe a device.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LimitsError {
    #[error("sample range [{min}, {max}] is empty")]
    EmptySampleRange { min: i32, max: i32 },

    #[error("tick frequency must be greater than zero")]
    ZeroTickFrequency,

    #[error("sensitivity bounds [{min}, {max}] are invalid")]
    InvalidSensitivityBounds { min: f32, max: f32 },

    #[error("max mouse speed must be >= 0, got {0}")]
    NegativeMouseSpeed(i32),

    #[error("hysteresis band must be >= 0, got {0}")]
    NegativeHysteresis(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ConfigParseError::OutOfRange {
            key: "maxspeed".to_string(),
            value: "9000".to_string(),
            min: "0".to_string(),
            max: "5000".to_string(),
        };
        assert_eq!(err.to_string(), "maxspeed value 9000 is out of range [0, 5000]");
        assert_eq!(err.key(), "maxspeed");
    }

    #[test]
    fn test_profile_error_carries_line() {
        let err = ProfileError::Line {
            line: 4,
            source: ConfigParseError::MissingValue {
                key: "dzone".to_string(),
            },
        };
        assert_eq!(err.to_string(), "line 4: missing value after 'dzone'");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_limits_error_display() {
        assert_eq!(
            LimitsError::ZeroTickFrequency.to_string(),
            "tick frequency must be greater than zero"
        );
    }
}
