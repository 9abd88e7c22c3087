//! joymapctl - joystick axis profile tool
//!
//! Checks axis profiles and replays scripted sample/tick streams through the
//! axis engines, printing the events that would be injected.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;
mod script;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use joymap_axis::EngineLimits;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Commands;
use crate::error::CliError;

/// Axis count assumed when a profile does not say otherwise.
const DEFAULT_AXES: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "joymapctl")]
#[command(about = "Check joystick axis profiles and replay input scripts through them")]
#[command(version)]
#[command(long_about = "
joymapctl loads axis profiles (one `Axis N:` line per configured axis) and
drives the same engines a mapper would, without touching any input device.
Events are printed instead of injected.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// YAML file overriding the device limits
    #[arg(long, global = true, env = "JOYMAP_LIMITS")]
    limits: Option<PathBuf>,

    /// Number of axes on the device
    #[arg(long, global = true, default_value_t = DEFAULT_AXES)]
    axes: usize,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("joymapctl={log_level},joymap_axis={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let limits = load_limits(cli.limits.as_deref())?;
    match &cli.command {
        Commands::Check { profile } => commands::check::execute(profile, cli.axes, limits, cli.json),
        Commands::Replay { profile, script } => {
            commands::replay::execute(profile, script, cli.axes, limits, cli.json)
        }
    }
}

/// Limits from `path`, or the defaults. Missing fields fall back to their
/// defaults too.
fn load_limits(path: Option<&Path>) -> Result<EngineLimits> {
    let Some(path) = path else {
        return Ok(EngineLimits::default());
    };
    let text = fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("reading limits {}", path.display()))?;
    let limits: EngineLimits = serde_yaml::from_str(&text).map_err(CliError::from)?;
    limits.validate().map_err(CliError::from)?;
    debug!(?limits, "limits loaded");
    Ok(limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_check_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["joymapctl", "check", "pad.axes"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.axes, DEFAULT_AXES);
        assert!(matches!(
            cli.command,
            Commands::Check { ref profile } if profile == Path::new("pad.axes")
        ));
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "joymapctl",
            "replay",
            "pad.axes",
            "moves.txt",
            "--json",
            "-vv",
            "--axes",
            "6",
            "--limits",
            "limits.yaml",
        ])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.axes, 6);
        assert_eq!(cli.limits.as_deref(), Some(Path::new("limits.yaml")));
        assert!(matches!(cli.command, Commands::Replay { .. }));
        Ok(())
    }

    #[test]
    fn parse_replay_requires_script() {
        let result = Cli::try_parse_from(["joymapctl", "replay", "pad.axes"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_unknown_subcommand() {
        let result = Cli::try_parse_from(["joymapctl", "inject"]);
        assert!(result.is_err());
    }

    #[test]
    fn limits_default_without_file() -> TestResult {
        let limits = load_limits(None).map_err(|e| e.to_string())?;
        assert_eq!(limits, EngineLimits::default());
        Ok(())
    }

    #[test]
    fn limits_yaml_partial_override() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("limits.yaml");
        fs::write(&path, "tick_frequency: 20\nhysteresis: 250\n")?;

        let limits = load_limits(Some(&path)).map_err(|e| e.to_string())?;
        assert_eq!(limits.tick_frequency, 20);
        assert_eq!(limits.hysteresis, 250);
        assert_eq!(limits.joy_max, EngineLimits::default().joy_max);
        Ok(())
    }

    #[test]
    fn limits_yaml_rejects_invalid_values() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("limits.yaml");
        fs::write(&path, "tick_frequency: 0\n")?;

        let err = load_limits(Some(&path)).err().ok_or("expected an error")?;
        assert_eq!(err.downcast_ref::<CliError>().map(CliError::exit_code), Some(4));
        Ok(())
    }
}
