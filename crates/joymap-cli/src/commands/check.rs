//! Profile check command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use joymap_axis::{AxisProfile, EngineLimits};
use tracing::info;

use crate::error::CliError;
use crate::output;

/// Execute the check command
pub fn execute(path: &Path, axes: usize, limits: EngineLimits, json: bool) -> Result<()> {
    let text = fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("reading profile {}", path.display()))?;

    let (profile, errors) = AxisProfile::load_lenient(&text, axes, limits);
    info!(
        path = %path.display(),
        axes = profile.axis_count(),
        errors = errors.len(),
        "profile checked"
    );

    output::print_check_report(&profile, &errors, json);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::ProfileInvalid {
            path: path.to_path_buf(),
            errors: errors.len(),
        }
        .into())
    }
}
