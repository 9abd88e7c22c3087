//! A device's worth of axis engines.

use tracing::{debug, warn};

use crate::codec::{read_line, write_line};
use crate::config::AxisConfig;
use crate::engine::AxisEngine;
use crate::error::{ProfileError, ProfileResult};
use crate::event::EventSink;
use crate::limits::EngineLimits;
use crate::tick::{MAX_AXES, TickSet};

/// Engines for every axis of one device, plus the set of axes that asked
/// for ticks.
///
/// The text form has one [`write_line`] line per non-default axis. Blank
/// lines and lines starting with `#` are ignored.
#[derive(Debug)]
pub struct AxisProfile {
    engines: Vec<AxisEngine>,
    limits: EngineLimits,
    ticks: TickSet,
}

impl AxisProfile {
    /// Profile with `axis_count` default axes, capped at [`MAX_AXES`].
    pub fn new(axis_count: usize, limits: EngineLimits) -> Self {
        Self::from_configs(vec![AxisConfig::default(); axis_count.min(MAX_AXES)], limits)
    }

    fn from_configs(configs: Vec<AxisConfig>, limits: EngineLimits) -> Self {
        let engines = configs
            .into_iter()
            .zip(0u8..)
            .map(|(config, index)| AxisEngine::new(index, config, limits))
            .collect();
        Self {
            engines,
            limits: limits.sanitized(),
            ticks: TickSet::new(),
        }
    }

    /// Load a profile, failing on the first bad line.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProfileError`] in line order.
    pub fn parse(text: &str, axis_count: usize, limits: EngineLimits) -> ProfileResult<Self> {
        let (profile, errors) = Self::load_lenient(text, axis_count, limits);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(profile),
        }
    }

    /// Load a profile, skipping bad lines. Axes whose line failed keep the
    /// default config.
    pub fn load_lenient(
        text: &str,
        axis_count: usize,
        limits: EngineLimits,
    ) -> (Self, Vec<ProfileError>) {
        let count = axis_count.min(MAX_AXES);
        let limits = limits.sanitized();
        let mut configs = vec![AxisConfig::default(); count];
        let mut seen = vec![false; count];
        let mut errors = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let line_number = number.saturating_add(1);
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            match Self::read_profile_line(trimmed, line_number, count, &seen, &limits) {
                Ok((index, config)) => {
                    if let (Some(slot), Some(flag)) = (configs.get_mut(index), seen.get_mut(index))
                    {
                        *slot = config;
                        *flag = true;
                    }
                }
                Err(err) => {
                    warn!(line = line_number, error = %err, "skipping profile line");
                    errors.push(err);
                }
            }
        }

        debug!(axes = count, errors = errors.len(), "profile loaded");
        (Self::from_configs(configs, limits), errors)
    }

    fn read_profile_line(
        line: &str,
        line_number: usize,
        count: usize,
        seen: &[bool],
        limits: &EngineLimits,
    ) -> ProfileResult<(usize, AxisConfig)> {
        let parsed = read_line(line, limits).map_err(|source| ProfileError::Line {
            line: line_number,
            source,
        })?;
        let index = parsed
            .index
            .ok_or(ProfileError::MissingHeader { line: line_number })?;
        match seen.get(index) {
            None => Err(ProfileError::AxisIndexOutOfRange {
                line: line_number,
                index: index.saturating_add(1),
                count,
            }),
            Some(true) => Err(ProfileError::DuplicateAxis {
                line: line_number,
                index: index.saturating_add(1),
            }),
            Some(false) => Ok((index, parsed.config)),
        }
    }

    /// Text form: one line per axis that differs from the default.
    pub fn write(&self) -> String {
        self.engines
            .iter()
            .filter(|engine| !engine.config().is_default())
            .map(|engine| {
                let mut line = write_line(usize::from(engine.index()), engine.config());
                line.push('\n');
                line
            })
            .collect()
    }

    pub fn axis_count(&self) -> usize {
        self.engines.len()
    }

    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    pub fn engine(&self, axis: usize) -> Option<&AxisEngine> {
        self.engines.get(axis)
    }

    pub fn engines(&self) -> impl Iterator<Item = &AxisEngine> {
        self.engines.iter()
    }

    /// Axes currently subscribed to ticks.
    pub fn ticking(&self) -> TickSet {
        self.ticks
    }

    /// Whether any axis needs ticks.
    pub fn wants_ticking(&self) -> bool {
        !self.ticks.is_empty()
    }

    fn no_such_axis(&self, axis: usize) -> ProfileError {
        ProfileError::NoSuchAxis {
            index: axis,
            count: self.engines.len(),
        }
    }

    /// Route a raw sample to axis `axis` (0-based).
    ///
    /// # Errors
    ///
    /// [`ProfileError::NoSuchAxis`] when the profile has no such axis.
    pub fn jsevent(&mut self, axis: usize, raw: i32, sink: &mut dyn EventSink) -> ProfileResult<()> {
        let err = self.no_such_axis(axis);
        let engine = self.engines.get_mut(axis).ok_or(err)?;
        engine.jsevent(raw, sink, &mut self.ticks);
        Ok(())
    }

    /// Deliver one tick to every subscribed axis, in index order.
    pub fn tick(&mut self, sink: &mut dyn EventSink) {
        let subscribed = self.ticks;
        for axis in subscribed.iter() {
            if let Some(engine) = self.engines.get_mut(usize::from(axis)) {
                engine.tick(sink);
            }
        }
    }

    /// Replace the config of one axis, releasing it first.
    ///
    /// # Errors
    ///
    /// [`ProfileError::NoSuchAxis`] when the profile has no such axis.
    pub fn apply_config(
        &mut self,
        axis: usize,
        config: AxisConfig,
        sink: &mut dyn EventSink,
    ) -> ProfileResult<()> {
        let err = self.no_such_axis(axis);
        let engine = self.engines.get_mut(axis).ok_or(err)?;
        engine.reconfigure(config, sink, &mut self.ticks);
        Ok(())
    }

    /// Release every axis and stop every tick subscription.
    pub fn shutdown(&mut self, sink: &mut dyn EventSink) {
        for engine in &mut self.engines {
            engine.shutdown(sink, &mut self.ticks);
        }
        debug!(axes = self.engines.len(), "profile shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::FakeEvent;

    #[test]
    fn test_new_caps_axis_count() {
        let profile = AxisProfile::new(500, EngineLimits::default());
        assert_eq!(profile.axis_count(), MAX_AXES);
        assert!(profile.write().is_empty());
    }

    #[test]
    fn test_parse_and_route() -> Result<(), Box<dyn std::error::Error>> {
        let text = "# pad\nAxis 2: ZeroOne, +key 30, -key 31\n";
        let mut profile = AxisProfile::parse(text, 4, EngineLimits::default())?;
        let mut events = Vec::new();

        profile.jsevent(1, 9000, &mut events)?;
        profile.jsevent(0, 9000, &mut events)?;
        profile.shutdown(&mut events);

        assert_eq!(
            events,
            vec![
                FakeEvent::KeyDown { code: 30 },
                FakeEvent::KeyDown { code: 0 },
                FakeEvent::KeyUp { code: 0 },
                FakeEvent::KeyUp { code: 30 },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_unknown_axis() {
        let mut profile = AxisProfile::new(2, EngineLimits::default());
        let mut events = Vec::new();
        assert_eq!(
            profile.jsevent(7, 100, &mut events),
            Err(ProfileError::NoSuchAxis { index: 7, count: 2 })
        );
    }

    #[test]
    fn test_strict_parse_reports_first_error() {
        let text = "Axis 1: dzone 99999\nAxis 9: gradient\n";
        let err = AxisProfile::parse(text, 2, EngineLimits::default());
        assert!(matches!(err, Err(ProfileError::Line { line: 1, .. })));
    }

    #[test]
    fn test_lenient_keeps_good_lines() {
        let text = "Axis 1: maxspeed -4\n\
                    Axis 2: gradient, mouse+h\n\
                    gradient\n\
                    Axis 9: gradient\n\
                    Axis 2: zeroone\n";
        let (profile, errors) = AxisProfile::load_lenient(text, 3, EngineLimits::default());

        assert_eq!(errors.len(), 4);
        assert!(matches!(errors.first(), Some(ProfileError::Line { line: 1, .. })));
        assert!(matches!(errors.get(1), Some(ProfileError::MissingHeader { line: 3 })));
        assert!(matches!(
            errors.get(2),
            Some(ProfileError::AxisIndexOutOfRange { line: 4, index: 9, count: 3 })
        ));
        assert!(matches!(
            errors.get(3),
            Some(ProfileError::DuplicateAxis { line: 5, index: 2 })
        ));

        assert!(profile.engine(0).is_some_and(|e| e.config().is_default()));
        assert!(profile.engine(1).is_some_and(|e| !e.config().is_default()));
    }

    #[test]
    fn test_ticks_fan_out_to_subscribed_axes() -> Result<(), Box<dyn std::error::Error>> {
        let text = "Axis 1: gradient, mouse+h, maxspeed 10, tcurve 0\n\
                    Axis 3: gradient, mouse+v, maxspeed 10, tcurve 0\n";
        let mut profile = AxisProfile::parse(text, 3, EngineLimits::default())?;
        let mut events = Vec::new();

        profile.jsevent(0, 32767, &mut events)?;
        profile.jsevent(2, -32767, &mut events)?;
        assert_eq!(profile.ticking().iter().collect::<Vec<_>>(), vec![0, 2]);

        profile.tick(&mut events);
        assert_eq!(
            events,
            vec![
                FakeEvent::MouseMoveRelative { dx: 10, dy: 0 },
                FakeEvent::MouseMoveRelative { dx: 0, dy: -10 },
            ]
        );

        profile.shutdown(&mut events);
        assert!(!profile.wants_ticking());
        Ok(())
    }
}
