//! Tick subscription capability.
//!
//! Gradient axes need a periodic tick while they are active. Instead of
//! wiring a timer inside the engine, the engine tells a [`TickScheduler`]
//! when it starts and stops needing ticks; the scheduler decides how ticks are
//! delivered.

use tracing::warn;

/// Highest number of axes a [`TickSet`] can track.
pub const MAX_AXES: usize = 64;

/// Receiver of tick subscription changes.
///
/// Engines only call `start` when not already ticking and `stop` when
/// ticking, but implementations should still treat both as idempotent.
pub trait TickScheduler {
    fn start(&mut self, axis: u8);
    fn stop(&mut self, axis: u8);
}

/// Set of axis indices currently subscribed to ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSet {
    mask: u64,
}

impl TickSet {
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    fn bit(axis: u8) -> Option<u64> {
        1u64.checked_shl(u32::from(axis))
    }

    pub fn contains(&self, axis: u8) -> bool {
        Self::bit(axis).is_some_and(|bit| self.mask & bit != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Subscribed axis indices, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u8> + use<> {
        let mask = self.mask;
        (0..MAX_AXES as u8).filter(move |&axis| mask & (1u64 << axis) != 0)
    }
}

impl TickScheduler for TickSet {
    fn start(&mut self, axis: u8) {
        match Self::bit(axis) {
            Some(bit) => self.mask |= bit,
            None => warn!(axis, "axis index beyond tick set capacity, not ticking"),
        }
    }

    fn stop(&mut self, axis: u8) {
        if let Some(bit) = Self::bit(axis) {
            self.mask &= !bit;
        }
    }
}
