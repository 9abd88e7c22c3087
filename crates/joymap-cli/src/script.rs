//! Replay scripts.
//!
//! One step per line:
//!
//! ```text
//! # comment
//! s 1 15000     sample: axis (1-based) and raw value
//! t             one tick
//! t 25          25 ticks
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: missing {what}")]
    MissingArgument { line: usize, what: &'static str },

    #[error("line {line}: invalid {what} '{value}'")]
    InvalidNumber {
        line: usize,
        what: &'static str,
        value: String,
    },

    #[error("line {line}: unexpected trailing token '{token}'")]
    TrailingToken { line: usize, token: String },
}

/// One replay step with the script line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Raw sample for a 0-based axis.
    Sample { line: usize, axis: usize, value: i32 },
    Tick { line: usize, count: u32 },
}

impl Step {
    pub fn line(&self) -> usize {
        match *self {
            Step::Sample { line, .. } | Step::Tick { line, .. } => line,
        }
    }
}

/// Parse a whole script.
pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        let line = number.saturating_add(1);
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        steps.push(parse_step(line, content)?);
    }
    Ok(steps)
}

fn parse_step(line: usize, content: &str) -> Result<Step, ScriptError> {
    let mut tokens = content.split_whitespace();
    let command = tokens.next().unwrap_or_default();
    let step = match command.to_ascii_lowercase().as_str() {
        "s" | "sample" => {
            let axis: usize = number(line, "axis", tokens.next())?;
            if axis == 0 {
                return Err(ScriptError::InvalidNumber {
                    line,
                    what: "axis",
                    value: "0".to_string(),
                });
            }
            let value = number(line, "value", tokens.next())?;
            Step::Sample {
                line,
                axis: axis.saturating_sub(1),
                value,
            }
        }
        "t" | "tick" => {
            let count = match tokens.next() {
                Some(token) => number(line, "count", Some(token))?,
                None => 1,
            };
            Step::Tick { line, count }
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };
    match tokens.next() {
        Some(token) => Err(ScriptError::TrailingToken {
            line,
            token: token.to_string(),
        }),
        None => Ok(step),
    }
}

fn number<T: std::str::FromStr>(
    line: usize,
    what: &'static str,
    token: Option<&str>,
) -> Result<T, ScriptError> {
    let token = token.ok_or(ScriptError::MissingArgument { line, what })?;
    match token.parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(ScriptError::InvalidNumber {
            line,
            what,
            value: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() -> Result<(), ScriptError> {
        let steps = parse("# warm up\ns 1 15000\n\nt\nT 25 # hold\nsample 3 -200\n")?;
        assert_eq!(
            steps,
            vec![
                Step::Sample { line: 2, axis: 0, value: 15000 },
                Step::Tick { line: 4, count: 1 },
                Step::Tick { line: 5, count: 25 },
                Step::Sample { line: 6, axis: 2, value: -200 },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_errors_carry_line() {
        assert_eq!(
            parse("t\nwiggle 3"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                command: "wiggle".to_string()
            })
        );
        assert_eq!(
            parse("s 1"),
            Err(ScriptError::MissingArgument { line: 1, what: "value" })
        );
        assert_eq!(
            parse("s 0 100"),
            Err(ScriptError::InvalidNumber {
                line: 1,
                what: "axis",
                value: "0".to_string()
            })
        );
        assert_eq!(
            parse("t -3"),
            Err(ScriptError::InvalidNumber {
                line: 1,
                what: "count",
                value: "-3".to_string()
            })
        );
        assert_eq!(
            parse("t 2 3"),
            Err(ScriptError::TrailingToken {
                line: 1,
                token: "3".to_string()
            })
        );
    }
}
