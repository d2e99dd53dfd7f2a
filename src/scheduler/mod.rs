//! Periodic timers independent of any UI toolkit
//!
//! A [`Scheduler`] holds any number of fixed-period timers on tokio's clock.
//! The host awaits [`Scheduler::wait`], which resolves with the id of the
//! timer that fired and re-arms it.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Handle to a registered timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(usize);

#[derive(Debug, Clone)]
struct Timer {
    period: Duration,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Option<Timer>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a timer that first fires one `period` from now
    pub fn register(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.timers.len());
        self.timers.push(Some(Timer {
            period,
            deadline: Instant::now() + period,
        }));
        id
    }

    /// Stop a timer; unknown or already cancelled ids are ignored
    pub fn cancel(&mut self, id: TimerId) {
        if let Some(slot) = self.timers.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Change a timer's period and re-arm it one new period from now
    pub fn set_period(&mut self, id: TimerId, period: Duration) {
        if let Some(Some(timer)) = self.timers.get_mut(id.0) {
            timer.period = period;
            timer.deadline = Instant::now() + period;
        }
    }

    pub fn period(&self, id: TimerId) -> Option<Duration> {
        self.timer(id).map(|timer| timer.period)
    }

    /// The earliest pending deadline; ties go to the earlier registration
    pub fn next_deadline(&self) -> Option<(TimerId, Instant)> {
        self.timers
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|timer| (TimerId(index), timer.deadline)))
            .min_by_key(|&(id, deadline)| (deadline, id))
    }

    /// Sleep until the next timer is due, re-arm it and return its id.
    ///
    /// Pends forever when nothing is registered. Cancel-safe: nothing changes
    /// unless the sleep completes.
    pub async fn wait(&mut self) -> TimerId {
        let Some((id, deadline)) = self.next_deadline() else {
            return std::future::pending().await;
        };
        sleep_until(deadline).await;
        self.rearm(id, deadline);
        id
    }

    fn rearm(&mut self, id: TimerId, fired_at: Instant) {
        if let Some(Some(timer)) = self.timers.get_mut(id.0) {
            let next = fired_at + timer.period;
            let now = Instant::now();
            // A stalled loop skips the missed firings instead of bursting
            timer.deadline = if next <= now { now + timer.period } else { next };
        }
    }

    fn timer(&self, id: TimerId) -> Option<&Timer> {
        self.timers.get(id.0).and_then(Option::as_ref)
    }
}
