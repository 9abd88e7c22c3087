//! Script replay command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use joymap_axis::{AxisProfile, EngineLimits, EventSink, FakeEvent};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CliError;
use crate::output;
use crate::script::{self, Step};

/// An event together with the script line that caused it. `line` is `None`
/// for events emitted by the final shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Emitted {
    pub line: Option<usize>,
    pub event: FakeEvent,
}

/// Sink that tags every event with the step being replayed.
#[derive(Debug, Default)]
pub struct Recorder {
    line: Option<usize>,
    emitted: Vec<Emitted>,
}

impl Recorder {
    pub fn into_emitted(self) -> Vec<Emitted> {
        self.emitted
    }
}

impl EventSink for Recorder {
    fn send(&mut self, event: FakeEvent) {
        self.emitted.push(Emitted {
            line: self.line,
            event,
        });
    }
}

/// Execute the replay command
pub fn execute(
    profile_path: &Path,
    script_path: &Path,
    axes: usize,
    limits: EngineLimits,
    json: bool,
) -> Result<()> {
    let profile_text = read(profile_path, "profile")?;
    let script_text = read(script_path, "script")?;

    let mut profile = AxisProfile::parse(&profile_text, axes, limits).map_err(CliError::from)?;
    let steps = script::parse(&script_text).map_err(CliError::from)?;
    info!(steps = steps.len(), axes = profile.axis_count(), "replaying");

    let (emitted, result) = run(&mut profile, &steps);
    output::print_events(&emitted, json);
    result
}

/// Replay `steps`, then shut the profile down. The shutdown also runs when a
/// step fails, so the returned events never leave a key pressed.
pub fn run(profile: &mut AxisProfile, steps: &[Step]) -> (Vec<Emitted>, Result<()>) {
    let mut recorder = Recorder::default();
    let mut result = Ok(());

    for step in steps {
        recorder.line = Some(step.line());
        match *step {
            Step::Sample { axis, value, .. } => {
                if let Err(err) = profile.jsevent(axis, value, &mut recorder) {
                    result = Err(anyhow::Error::from(CliError::from(err))
                        .context(format!("script line {}", step.line())));
                    break;
                }
            }
            Step::Tick { count, .. } => {
                for _ in 0..count {
                    if !profile.wants_ticking() {
                        break;
                    }
                    profile.tick(&mut recorder);
                }
            }
        }
    }

    recorder.line = None;
    profile.shutdown(&mut recorder);
    debug!(events = recorder.emitted.len(), "replay finished");
    (recorder.into_emitted(), result)
}

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(CliError::from)
        .with_context(|| format!("reading {what} {}", path.display()))
}
