//! Per-axis signal-to-event state machine.
//!
//! ## Sample path
//! [`AxisEngine::jsevent`] applies the throttle bias and runs the hysteresis
//! check. Turning off always releases the held key, stops the tick
//! subscription and clears the counters. Turning on under a timed
//! interpretation computes the first duty duration and subscribes to ticks.
//! Under [`Interpretation::ZeroOne`] each transition drives output directly.
//! A sample that changes neither state emits nothing.
//!
//! ## Tick path
//! [`AxisEngine::timer_tick`] only does work while the axis is on. Digital
//! axes run a duty cycle over windows of `tick_frequency` ticks; axes that
//! move the pointer step once per tick.
//!
//! ## Guarantees
//! - Downs and ups strictly alternate, and an up always names the code that
//!   went down.
//! - Every tick subscription started is stopped on deactivation,
//!   reconfiguration and [`AxisEngine::shutdown`].

use joymap_curves::ZoneRange;
use tracing::{debug, trace, warn};

use crate::accumulator::DistanceAccumulator;
use crate::config::{AxisConfig, KeyBinding};
use crate::event::{EventSink, FakeEvent};
use crate::limits::EngineLimits;
use crate::mode::{AxisMode, Interpretation, KeyThreshold, MouseAxis};
use crate::tick::TickScheduler;

/// Mutable state of one axis. Owned by its [`AxisEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct AxisRuntime {
    state: i32,
    is_on: bool,
    held: Option<KeyBinding>,
    tick: u32,
    duration: u32,
    accumulator: DistanceAccumulator,
    zones: ZoneRange,
    ticking: bool,
    absolute_position: i32,
}

impl AxisRuntime {
    fn new(zones: ZoneRange) -> Self {
        Self {
            state: 0,
            is_on: false,
            held: None,
            tick: 0,
            duration: 0,
            accumulator: DistanceAccumulator::new(),
            zones,
            ticking: false,
            absolute_position: 0,
        }
    }

    /// Last throttled sample.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Logical on/off flag driven by the hysteresis check.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Whether a down has been emitted without its matching up.
    pub fn is_pressed(&self) -> bool {
        self.held.is_some()
    }

    /// Binding currently held down.
    pub fn held(&self) -> Option<KeyBinding> {
        self.held
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Ticks per window the key stays down in the duty cycle.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn inverse_range(&self) -> f32 {
        self.zones.inverse_range()
    }

    /// Fraction of a pixel carried to the next gradient tick.
    pub fn residual(&self) -> f64 {
        self.accumulator.residual()
    }

    /// Last absolute position emitted, 0 when centred.
    pub fn absolute_position(&self) -> i32 {
        self.absolute_position
    }
}

/// Turns raw samples and ticks of one axis into [`FakeEvent`]s.
///
/// The engine holds no timer and no sink. Callers pass the [`EventSink`] that
/// receives events and the [`TickScheduler`] told when ticks are needed.
#[derive(Debug)]
pub struct AxisEngine {
    index: u8,
    config: AxisConfig,
    limits: EngineLimits,
    runtime: AxisRuntime,
}

impl AxisEngine {
    /// Create an idle engine for axis `index` (0-based).
    ///
    /// Unusable limits are replaced by defaults and `config` is clamped to
    /// them.
    pub fn new(index: u8, config: AxisConfig, limits: EngineLimits) -> Self {
        let limits = limits.sanitized();
        let config = config.clamped(&limits);
        let zones = ZoneRange::new(config.dead_zone, config.extreme_zone);
        let mut engine = Self {
            index,
            config,
            limits,
            runtime: AxisRuntime::new(zones),
        };
        engine.adjust_gradient();
        engine
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    /// Display name, 1-based: `Axis 1` for index 0.
    pub fn name(&self) -> String {
        format!("Axis {}", u16::from(self.index) + 1)
    }

    /// Name plus the config's status label, e.g. `Axis 2: KEYBOARD`.
    pub fn status(&self) -> String {
        format!("{}: {}", self.name(), self.config.status_label())
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    pub fn runtime(&self) -> &AxisRuntime {
        &self.runtime
    }

    /// True exactly while a timed axis is on and subscribed to ticks.
    pub fn wants_ticking(&self) -> bool {
        self.runtime.ticking
    }

    /// Sample after range clamping and the throttle bias.
    pub fn throttled(&self, raw: i32) -> i32 {
        let raw = raw.clamp(self.limits.joy_min, self.limits.joy_max);
        self.config
            .throttle
            .apply(raw, self.limits.joy_min, self.limits.joy_max)
    }

    /// Whether `raw` lies strictly inside the dead zone once throttled.
    pub fn in_dead_zone(&self, raw: i32) -> bool {
        self.throttled(raw).saturating_abs() < self.config.dead_zone
    }

    /// Feed one raw sample.
    pub fn jsevent(
        &mut self,
        raw: i32,
        sink: &mut dyn EventSink,
        ticks: &mut dyn TickScheduler,
    ) {
        let state = self.throttled(raw);
        self.runtime.state = state;
        let magnitude = state.saturating_abs();
        let dead_zone = self.config.dead_zone;
        let off_below = dead_zone.saturating_sub(self.hysteresis_band());

        if self.runtime.is_on && magnitude < off_below {
            self.deactivate(sink, ticks);
        } else if !self.runtime.is_on && magnitude >= dead_zone {
            self.activate(ticks);
        } else {
            return;
        }

        if !self.config.interpretation.uses_timer() {
            self.move_axis(self.runtime.is_on, sink);
        }
    }

    /// Advance the runtime tick counter and run one tick.
    pub fn tick(&mut self, sink: &mut dyn EventSink) {
        self.runtime.tick = self.runtime.tick.wrapping_add(1);
        self.timer_tick(self.runtime.tick, sink);
    }

    /// Run the periodic step for tick number `tick`. No-op while off.
    pub fn timer_tick(&mut self, tick: u32, sink: &mut dyn EventSink) {
        if !self.runtime.is_on {
            return;
        }
        match self.config.mode {
            AxisMode::Digital => self.duty_cycle(tick, sink),
            AxisMode::Mouse(_) | AxisMode::Compound { .. } => self.move_axis(true, sink),
        }
    }

    /// Emit the output for the current state with the given press flag.
    pub fn move_axis(&mut self, press: bool, sink: &mut dyn EventSink) {
        match self.config.mode {
            AxisMode::Digital => self.move_key(press, sink),
            AxisMode::Compound { axis, threshold } => {
                let engage_at = match threshold {
                    KeyThreshold::ExtremeZone => self.config.extreme_zone,
                    KeyThreshold::DeadZone => self.config.dead_zone,
                };
                let key_press = press && self.runtime.state.saturating_abs() >= engage_at;
                self.move_key(key_press, sink);
                if press {
                    self.move_pointer(axis, sink);
                }
            }
            AxisMode::Mouse(axis) => {
                if press {
                    self.move_pointer(axis, sink);
                }
            }
        }
    }

    /// Emit the up for the held binding, if any. Idempotent.
    pub fn release(&mut self, sink: &mut dyn EventSink) {
        if let Some(binding) = self.runtime.held.take() {
            self.emit(sink, binding.release_event());
        }
    }

    /// Recompute the zone band and drop the accumulated fraction.
    ///
    /// A degenerate band is clamped to a width of one unit.
    pub fn adjust_gradient(&mut self) {
        let zones = ZoneRange::new(self.config.dead_zone, self.config.extreme_zone);
        if zones.is_degenerate() {
            warn!(
                axis = self.index,
                dead_zone = zones.dead_zone(),
                extreme_zone = zones.extreme_zone(),
                "extreme zone does not exceed dead zone, clamping gradient"
            );
        }
        self.runtime.zones = zones;
        self.runtime.accumulator.reset();
    }

    /// Release everything and stop ticking. The engine stays usable; the next
    /// sample past the dead zone turns it on again.
    pub fn shutdown(&mut self, sink: &mut dyn EventSink, ticks: &mut dyn TickScheduler) {
        self.deactivate(sink, ticks);
    }

    /// Replace the config. The axis is shut down first and its runtime reset.
    pub fn reconfigure(
        &mut self,
        config: AxisConfig,
        sink: &mut dyn EventSink,
        ticks: &mut dyn TickScheduler,
    ) {
        self.shutdown(sink, ticks);
        self.config = config.clamped(&self.limits);
        self.runtime = AxisRuntime::new(self.runtime.zones);
        self.adjust_gradient();
    }

    /// Reset to the default config.
    pub fn to_default(&mut self, sink: &mut dyn EventSink, ticks: &mut dyn TickScheduler) {
        self.reconfigure(AxisConfig::default(), sink, ticks);
    }

    pub fn set_zones(&mut self, dead_zone: i32, extreme_zone: i32) {
        self.config.dead_zone = dead_zone;
        self.config.extreme_zone = extreme_zone;
        self.config = self.config.clamped(&self.limits);
        self.adjust_gradient();
    }

    pub fn set_max_speed(&mut self, max_speed: i32) {
        self.config.max_speed = max_speed;
        self.config = self.config.clamped(&self.limits);
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.config.sensitivity = sensitivity;
        self.config = self.config.clamped(&self.limits);
    }

    /// Rebind one direction. A binding already held keeps its code until
    /// released.
    pub fn set_key(&mut self, positive: bool, binding: KeyBinding) {
        self.config.set_key(positive, binding);
        self.config = self.config.clamped(&self.limits);
    }

    /// Hysteresis narrowed so a centred sample always turns the axis off.
    fn hysteresis_band(&self) -> i32 {
        self.limits
            .hysteresis
            .min(self.config.dead_zone.saturating_sub(1))
            .max(0)
    }

    fn activate(&mut self, ticks: &mut dyn TickScheduler) {
        self.runtime.is_on = true;
        debug!(axis = self.index, state = self.runtime.state, "axis on");
        if self.config.interpretation.uses_timer() {
            self.runtime.duration = self.duty_duration();
            if !self.runtime.ticking {
                self.runtime.ticking = true;
                ticks.start(self.index);
                debug!(axis = self.index, duration = self.runtime.duration, "tick started");
            }
        }
    }

    fn deactivate(&mut self, sink: &mut dyn EventSink, ticks: &mut dyn TickScheduler) {
        if self.runtime.is_on {
            debug!(axis = self.index, state = self.runtime.state, "axis off");
        }
        self.runtime.is_on = false;
        self.release(sink);
        if self.runtime.ticking {
            self.runtime.ticking = false;
            ticks.stop(self.index);
            debug!(axis = self.index, "tick stopped");
        }
        self.runtime.tick = 0;
        self.runtime.duration = 0;
        if self.runtime.absolute_position != 0 {
            self.runtime.absolute_position = 0;
            if let Some(axis) = self.config.mode.mouse_axis() {
                let (x, y) = axis.displacement(0);
                self.emit(sink, FakeEvent::MouseMoveAbsolute { x, y });
            }
        }
    }

    /// `floor(|state| * tick_frequency / joy_max)`, at most one full window.
    fn duty_duration(&self) -> u32 {
        let frequency = self.limits.tick_frequency.max(1);
        let magnitude = i64::from(self.runtime.state.saturating_abs());
        let scaled = magnitude * i64::from(frequency) / i64::from(self.limits.joy_max.max(1));
        u32::try_from(scaled.max(0)).map_or(frequency, |d| d.min(frequency))
    }

    fn duty_cycle(&mut self, tick: u32, sink: &mut dyn EventSink) {
        let window = self.limits.tick_frequency.max(1);
        let phase = tick % window;
        if phase == 0 {
            if self.runtime.duration == window {
                if !self.runtime.is_pressed() {
                    self.move_key(true, sink);
                }
                self.runtime.duration = self.duty_duration();
                return;
            }
            self.move_key(true, sink);
        }
        if phase == self.runtime.duration {
            self.move_key(false, sink);
            self.runtime.duration = self.duty_duration();
        }
    }

    fn move_key(&mut self, press: bool, sink: &mut dyn EventSink) {
        if self.runtime.is_pressed() == press {
            return;
        }
        if press {
            let binding = self.config.binding_for(self.runtime.state);
            self.runtime.held = Some(binding);
            self.emit(sink, binding.press_event());
        } else {
            self.release(sink);
        }
    }

    fn move_pointer(&mut self, axis: MouseAxis, sink: &mut dyn EventSink) {
        match self.config.interpretation {
            Interpretation::AbsolutePosition => {
                let position = saturating_round(self.shaped_distance());
                if position != self.runtime.absolute_position {
                    self.runtime.absolute_position = position;
                    let (x, y) = axis.displacement(position);
                    self.emit(sink, FakeEvent::MouseMoveAbsolute { x, y });
                }
            }
            Interpretation::Gradient => {
                let distance = self.shaped_distance();
                let step = self.runtime.accumulator.push(distance);
                self.emit_relative(axis, step, sink);
            }
            Interpretation::ZeroOne => {
                let speed = self.config.max_speed;
                let step = if self.runtime.state >= 0 {
                    speed
                } else {
                    speed.saturating_neg()
                };
                self.emit_relative(axis, step, sink);
            }
        }
    }

    fn emit_relative(&self, axis: MouseAxis, distance: i32, sink: &mut dyn EventSink) {
        if distance != 0 {
            let (dx, dy) = axis.displacement(distance);
            self.emit(sink, FakeEvent::MouseMoveRelative { dx, dy });
        }
    }

    /// Curve-shaped distance for one tick, signed by the state.
    fn shaped_distance(&self) -> f64 {
        let state = self.runtime.state;
        let v = self.runtime.zones.shape(
            state.saturating_abs(),
            self.config.curve,
            self.config.sensitivity,
        );
        let distance = f64::from(v) * f64::from(self.config.max_speed);
        if state < 0 { -distance } else { distance }
    }

    fn emit(&self, sink: &mut dyn EventSink, event: FakeEvent) {
        trace!(axis = self.index, %event, "emit");
        sink.send(event);
    }
}

impl Drop for AxisEngine {
    fn drop(&mut self) {
        if self.runtime.is_pressed() || self.runtime.ticking {
            warn!(
                axis = self.index,
                held = ?self.runtime.held,
                ticking = self.runtime.ticking,
                "axis dropped without shutdown"
            );
        }
    }
}

fn saturating_round(value: f64) -> i32 {
    if value.is_finite() {
        // `as` saturates
        value.round() as i32
    } else {
        0
    }
}
