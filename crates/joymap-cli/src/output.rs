//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use joymap_axis::{AxisProfile, FakeEvent, ProfileError};
use serde_json::json;

use crate::commands::replay::Emitted;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "causes": chain,
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the result of a profile check
pub fn print_check_report(profile: &AxisProfile, errors: &[ProfileError], json: bool) {
    if json {
        let axes: Vec<_> = profile
            .engines()
            .filter(|engine| !engine.config().is_default())
            .map(|engine| {
                json!({
                    "axis": engine.name(),
                    "status": engine.config().status_label(),
                    "config": engine.config(),
                })
            })
            .collect();
        let output = json!({
            "success": errors.is_empty(),
            "errors": errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "axes": axes,
            "canonical": profile.write(),
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format check report as JSON: {}", e),
        }
        return;
    }

    for error in errors {
        eprintln!("{} {}", "✗".red(), error);
    }
    let configured: Vec<_> = profile
        .engines()
        .filter(|engine| !engine.config().is_default())
        .collect();
    if configured.is_empty() {
        println!("{}", "No axes configured".yellow());
        return;
    }
    for engine in &configured {
        eprintln!("{} {}", "✓".green(), engine.status());
    }
    print!("{}", profile.write());
}

/// Print replayed events
pub fn print_events(emitted: &[Emitted], json: bool) {
    if json {
        let output = json!({
            "success": true,
            "events": emitted,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("Failed to format events as JSON: {}", e),
        }
        return;
    }

    for Emitted { line, event } in emitted {
        let origin = match line {
            Some(line) => format!("{line:>5}"),
            None => "  end".to_string(),
        };
        println!("{} {}", origin.dimmed(), colorize(event));
    }
}

fn colorize(event: &FakeEvent) -> ColoredString {
    let text = event.to_string();
    if event.is_press() {
        text.green()
    } else if event.is_release() {
        text.yellow()
    } else {
        text.normal()
    }
}
