//! Command implementations for joymapctl

pub mod check;
pub mod replay;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a profile, report bad lines and print its canonical form
    Check {
        /// Profile file, one `Axis N:` line per configured axis
        profile: PathBuf,
    },

    /// Feed a scripted sample/tick stream through a profile and print the
    /// events it would inject
    Replay {
        /// Profile file
        profile: PathBuf,
        /// Script file: `s <axis> <value>`, `t [count]`, `# comment`
        script: PathBuf,
    },
}
