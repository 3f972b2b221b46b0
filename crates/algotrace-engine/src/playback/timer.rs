//! Single-slot tick scheduler.
//!
//! At most one tick is pending at a time. Scheduling replaces the pending
//! tick and every tick carries a fresh [`TickId`], so a tick that was
//! cancelled or replaced can be recognized and dropped when it fires late.

use std::time::Duration;

/// Identifies one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(u64);

impl TickId {
    /// Returns the raw counter value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: TickId,
    deadline: Duration,
}

/// A timer holding at most one pending tick.
///
/// Deadlines are offsets on the owner's clock; the timer itself never reads
/// the wall clock.
#[derive(Debug, Default)]
pub struct TickTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl TickTimer {
    /// Creates a timer with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a tick at `deadline`, replacing any pending tick.
    pub fn schedule(&mut self, deadline: Duration) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending { id, deadline });
        id
    }

    /// Drops the pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Consumes the pending tick if it is `id`, returning its deadline.
    /// Stale ids leave the timer untouched.
    pub fn fire(&mut self, id: TickId) -> Option<Duration> {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                Some(pending.deadline)
            }
            _ => None,
        }
    }

    /// Returns the pending tick and its deadline.
    #[must_use]
    pub fn pending(&self) -> Option<(TickId, Duration)> {
        self.pending.map(|p| (p.id, p.deadline))
    }

    /// Returns whether a tick is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_replaces() {
        let mut timer = TickTimer::new();
        let first = timer.schedule(Duration::from_millis(10));
        let second = timer.schedule(Duration::from_millis(20));
        assert_ne!(first, second);

        assert_eq!(timer.fire(first), None);
        assert_eq!(timer.fire(second), Some(Duration::from_millis(20)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut timer = TickTimer::new();
        let id = timer.schedule(Duration::ZERO);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.fire(id), None);
    }
}
