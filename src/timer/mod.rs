//! Timer capability: a deterministic wheel of repeating timers.
//!
//! Controllers never touch platform time. They schedule repeating entries on
//! a [`TimerWheel`] and hold the returned [`TimerId`]; the page drives the
//! wheel, either from virtual time in tests (`advance`) or from real time via
//! the async runner in [`crate::page`]. Cancel-by-handle mirrors the
//! `setInterval`/`clearInterval` contract the widgets were designed against.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled repeating timer. Copy, lightweight (u64).
    pub struct TimerId;
}

#[derive(Debug, Clone, Copy)]
struct Repeating {
    period: Duration,
    due: Duration,
    /// Monotonic insertion counter, for deterministic same-instant ordering.
    seq: u64,
}

/// A wheel of repeating timers over a virtual clock.
///
/// The wheel's clock starts at zero and only moves through [`advance`]
/// (`TimerWheel::advance`). Entries fire every `period` after the instant
/// they were scheduled, indefinitely, until cancelled.
#[derive(Debug, Default)]
pub struct TimerWheel {
    timers: SlotMap<TimerId, Repeating>,
    now: Duration,
    next_seq: u64,
}

impl TimerWheel {
    /// Create an empty wheel with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The wheel's current virtual instant.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a repeating timer firing every `period` from now.
    ///
    /// # Panics
    ///
    /// Panics (debug) on a zero period — a zero-interval repeat would fire
    /// unboundedly within a single `advance`.
    pub fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        debug_assert!(!period.is_zero(), "repeating timer period must be positive");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(Repeating {
            period,
            due: self.now + period,
            seq,
        })
    }

    /// Cancel a timer. Returns whether it was scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Whether the given handle refers to a scheduled timer.
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Number of scheduled timers.
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timers are scheduled.
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// The earliest due instant among scheduled timers.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|entry| entry.due).min()
    }

    /// Advance the clock by `delta`, returning every tick that fired, in
    /// chronological order.
    ///
    /// A delta spanning k periods of one timer yields k ticks for it; ticks
    /// of distinct timers due at the same instant come out in scheduling
    /// order.
    pub fn advance(&mut self, delta: Duration) -> Vec<TimerId> {
        let target = self.now + delta;
        let mut fired = Vec::new();

        loop {
            // Earliest due entry at or before the target instant.
            let next = self
                .timers
                .iter()
                .filter(|(_, entry)| entry.due <= target)
                .min_by_key(|(_, entry)| (entry.due, entry.seq))
                .map(|(id, _)| id);

            let Some(id) = next else { break };
            let entry = self
                .timers
                .get_mut(id)
                .expect("fired timer must still be scheduled");
            entry.due += entry.period;
            fired.push(id);
        }

        self.now = target;
        fired
    }
}

// ===========================================================================
// Tests
// ===========================================================================
