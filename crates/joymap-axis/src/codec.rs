//! One-line text form of an [`AxisConfig`].
//!
//! ```text
//! Axis 2: Gradient, throttle+, dZone 3000, xZone 30000, maxSpeed 100, tCurve 1, sens 1, +key 30, -key 31, keyboard
//! ```
//!
//! Tokens are case-insensitive and separated by whitespace and commas; a
//! trailing `:` on a token is ignored. Keys that take a value consume the
//! following token. Unknown tokens are skipped so newer profiles still load.

use std::fmt::Display;
use std::str::FromStr;

use joymap_curves::TransferCurve;

use crate::config::{AxisConfig, BindingTarget, KeyBinding};
use crate::error::ConfigParseError;
use crate::limits::EngineLimits;
use crate::mode::{AxisMode, Interpretation, KeyThreshold, ThrottleBias};
use crate::tick::MAX_AXES;

/// A parsed profile line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLine {
    /// 0-based axis index from an `Axis N:` header, when present.
    pub index: Option<usize>,
    pub config: AxisConfig,
}

/// Parse one line, starting from the default config.
///
/// # Errors
///
/// A value that is missing, not a number or outside its bounds fails the
/// whole line.
pub fn read_line(line: &str, limits: &EngineLimits) -> Result<AxisLine, ConfigParseError> {
    let lower = line.to_lowercase();
    let mut tokens = lower
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|token| token.strip_suffix(':').unwrap_or(token))
        .filter(|token| !token.is_empty());

    let mut index = None;
    let mut config = AxisConfig::default();
    let mut threshold = None;

    while let Some(key) = tokens.next() {
        match key {
            "axis" => {
                let number: usize = parse_value(key, tokens.next(), 1, MAX_AXES)?;
                index = Some(number.saturating_sub(1));
            }
            "maxspeed" => {
                config.max_speed = parse_value(key, tokens.next(), 0, limits.max_mouse_speed)?;
            }
            "dzone" => {
                config.dead_zone = parse_value(key, tokens.next(), 0, limits.joy_max)?;
            }
            "xzone" => {
                config.extreme_zone = parse_value(key, tokens.next(), 0, limits.joy_max)?;
            }
            "tcurve" => {
                let value = tokens.next();
                let curve_index: i64 =
                    parse_value(key, value, 0, i64::from(TransferCurve::MAX_INDEX))?;
                config.curve = TransferCurve::from_index(curve_index).map_err(|err| {
                    ConfigParseError::InvalidValue {
                        key: key.to_string(),
                        value: err.to_string(),
                        expected: "a transfer curve index",
                    }
                })?;
            }
            "sens" => {
                config.sensitivity = parse_value(
                    key,
                    tokens.next(),
                    limits.sensitivity_min,
                    limits.sensitivity_max,
                )?;
            }
            "+key" | "-key" | "+mouse" | "-mouse" => {
                let code = parse_value(key, tokens.next(), 0, limits.max_key)?;
                let target = if key.ends_with("mouse") {
                    BindingTarget::MouseButton
                } else {
                    BindingTarget::Key
                };
                config.set_key(key.starts_with('+'), KeyBinding { code, target });
            }
            "throttle+" => config.throttle = ThrottleBias::PositiveOnly,
            "throttle-" => config.throttle = ThrottleBias::NegativeOnly,
            "keyat" => {
                let value = tokens.next().ok_or_else(|| missing(key))?;
                let parsed =
                    KeyThreshold::from_token(value).ok_or_else(|| ConfigParseError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                        expected: "xzone, dzone",
                    })?;
                threshold = Some(parsed);
            }
            other => {
                if let Some(interpretation) = Interpretation::from_token(other) {
                    config.interpretation = interpretation;
                } else if let Some(mode) = AxisMode::from_token(other) {
                    config.mode = mode;
                }
            }
        }
    }

    if let (AxisMode::Compound { threshold: slot, .. }, Some(parsed)) =
        (&mut config.mode, threshold)
    {
        *slot = parsed;
    }

    Ok(AxisLine { index, config })
}

/// Canonical line for axis `index` (0-based). Every field is written, so
/// reading the line back gives the same config.
pub fn write_line(index: usize, config: &AxisConfig) -> String {
    let mut out = format!(
        "Axis {}: {}",
        index.saturating_add(1),
        config.interpretation.token()
    );
    if let Some(token) = config.throttle.token() {
        out.push_str(", ");
        out.push_str(token);
    }
    out.push_str(&format!(
        ", dZone {}, xZone {}, maxSpeed {}, tCurve {}, sens {}",
        config.dead_zone,
        config.extreme_zone,
        config.max_speed,
        config.curve.index(),
        config.sensitivity
    ));
    out.push_str(&format!(
        ", {} {}, {} {}, {}",
        binding_key(true, &config.positive),
        config.positive.code,
        binding_key(false, &config.negative),
        config.negative.code,
        config.mode.token()
    ));
    if let AxisMode::Compound { threshold, .. } = config.mode {
        out.push_str(", keyat ");
        out.push_str(threshold.token());
    }
    out
}

fn binding_key(positive: bool, binding: &KeyBinding) -> &'static str {
    match (positive, binding.target) {
        (true, BindingTarget::Key) => "+key",
        (true, BindingTarget::MouseButton) => "+mouse",
        (false, BindingTarget::Key) => "-key",
        (false, BindingTarget::MouseButton) => "-mouse",
    }
}

fn missing(key: &str) -> ConfigParseError {
    ConfigParseError::MissingValue {
        key: key.to_string(),
    }
}

fn parse_value<T>(key: &str, value: Option<&str>, min: T, max: T) -> Result<T, ConfigParseError>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let value = value.ok_or_else(|| missing(key))?;
    let parsed = match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            return Err(ConfigParseError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    };
    // NaN fails both comparisons
    if parsed >= min && parsed <= max {
        Ok(parsed)
    } else {
        Err(ConfigParseError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}
