//! Step tick sources
//!
//! A tick source is a cancellable schedule polled by the host loop. The
//! controller owns exactly one; arming it again replaces the old schedule, so
//! there is never more than one pending firing.

use std::time::{Duration, Instant};

/// A cancellable periodic schedule
pub trait TickSource {
    /// Start firing every `interval`, first at `now + interval`
    fn arm(&mut self, now: Instant, interval: Duration);

    /// Stop firing; takes effect before the next scheduled firing
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;

    /// Whether a firing is due at `now`. Consumes the firing when it is.
    ///
    /// A late poll yields a single firing and schedules the next one a whole
    /// interval after `now`, so missed deadlines never arrive as a burst.
    fn due(&mut self, now: Instant) -> bool;
}

/// [`TickSource`] over wall-clock deadlines
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    schedule: Option<(Instant, Duration)>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        IntervalTimer { schedule: None }
    }

    /// When the next firing is due, if armed
    pub fn deadline(&self) -> Option<Instant> {
        self.schedule.map(|(next, _)| next)
    }
}

impl TickSource for IntervalTimer {
    fn arm(&mut self, now: Instant, interval: Duration) {
        self.schedule = Some((now + interval, interval));
    }

    fn cancel(&mut self) {
        self.schedule = None;
    }

    fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    fn due(&mut self, now: Instant) -> bool {
        match self.schedule {
            Some((next, interval)) if now >= next => {
                self.schedule = Some((now + interval, interval));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let start = Instant::now();
        let interval = Duration::from_millis(100);
        let mut timer = IntervalTimer::new();
        timer.arm(start, interval);

        assert!(!timer.due(start + Duration::from_millis(50)));
        assert!(timer.due(start + interval));
        assert!(!timer.due(start + interval));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let start = Instant::now();
        let interval = Duration::from_millis(100);
        let mut timer = IntervalTimer::new();
        timer.arm(start, interval);

        let late = start + Duration::from_millis(1000);
        assert!(timer.due(late));
        assert!(!timer.due(late + Duration::from_millis(10)));
        assert_eq!(timer.deadline(), Some(late + interval));
    }

    #[test]
    fn test_cancel_disarms() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new();
        timer.arm(start, Duration::from_millis(10));
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.due(start + Duration::from_secs(5)));
    }
}
