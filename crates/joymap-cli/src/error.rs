//! Error types for joymapctl

use std::path::PathBuf;

use joymap_axis::{LimitsError, ProfileError};
use thiserror::Error;

use crate::script::ScriptError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Profile has {errors} invalid line(s): {}", path.display())]
    ProfileInvalid { path: PathBuf, errors: usize },

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("Invalid limits: {0}")]
    InvalidLimits(#[from] LimitsError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ProfileInvalid { .. } | CliError::Profile(_) => 2,
            CliError::Script(_) => 3,
            CliError::InvalidLimits(_) | CliError::YamlError(_) => 4,
            CliError::IoError(_) | CliError::JsonError(_) => 1,
        }
    }
}
