//! Quiet-period debouncing for the search input.
//!
//! The debouncer is a small standalone state machine driven by explicit
//! `Instant`s so it can be exercised in tests without a timer or a rendering
//! surface. The main loop feeds every raw input change through [`Debouncer::input`]
//! and polls for the settled value on each tick.

use std::time::{Duration, Instant};

/// Delays propagation of a rapidly-changing value until it has remained
/// unchanged for the configured delay. At most one settled value is produced
/// per quiet period.
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
    settled: String,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            settled: String::new(),
        }
    }

    /// Feed the current raw value, restarting the quiet-period timer unless
    /// the value is already pending or already settled. Returning to the
    /// settled value cancels any pending update.
    pub fn input(&mut self, value: &str, now: Instant) {
        if self.settled == value {
            self.pending = None;
            return;
        }
        if matches!(&self.pending, Some((pending, _)) if pending == value) {
            return;
        }
        self.pending = Some((value.to_string(), now));
    }

    /// Yields the settled value once the pending one has been stable for the
    /// full delay. Returns `None` while the timer is still running or nothing
    /// is pending.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let (value, queued_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*queued_at) < self.delay {
            return None;
        }
        let value = value.clone();
        self.pending = None;
        self.settled = value.clone();
        Some(value)
    }

    /// Force-settles `value` immediately, dropping any pending update. Used
    /// when the input is cleared so the view reverts without waiting out the
    /// delay.
    pub fn reset(&mut self, value: &str) {
        self.pending = None;
        self.settled = value.to_string();
    }

    pub fn settled(&self) -> &str {
        &self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
