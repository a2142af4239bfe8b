use std::time::{Duration, Instant};

/// One fired tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tick {
    /// Count of fired ticks before this one.
    pub index: u64,
    /// Scheduled instants that passed without firing (stalls, sleep).
    pub missed: u32,
}

/// Fixed-interval schedule.
///
/// The first tick is due immediately. After a stall the ticker fires once
/// and realigns to the original phase; missed periods are reported, not
/// replayed.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
    fired: u64,
}

impl Ticker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        debug_assert!(!interval.is_zero(), "ticker interval must be non-zero");
        Self { interval: interval.max(Duration::from_millis(1)), next: start, fired: 0 }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant the next tick is due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Fires if the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if now < self.next {
            return None;
        }

        let late = now.duration_since(self.next);
        let periods = late.as_nanos() / self.interval.as_nanos();
        let missed = u32::try_from(periods).unwrap_or(u32::MAX);

        self.next += self.interval * missed.saturating_add(1);

        let tick = Tick { index: self.fired, missed };
        self.fired += 1;
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn first_tick_is_immediate() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC, t0);
        assert_eq!(ticker.poll(t0), Some(Tick { index: 0, missed: 0 }));
        assert_eq!(ticker.deadline(), t0 + SEC);
    }

    #[test]
    fn waits_for_deadline() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC, t0);
        ticker.poll(t0);
        assert_eq!(ticker.poll(t0 + Duration::from_millis(999)), None);
        assert_eq!(ticker.poll(t0 + SEC), Some(Tick { index: 1, missed: 0 }));
    }

    #[test]
    fn stall_reports_missed_and_keeps_phase() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC, t0);
        ticker.poll(t0);
        let late = t0 + Duration::from_millis(4_500);
        assert_eq!(ticker.poll(late), Some(Tick { index: 1, missed: 3 }));
        assert_eq!(ticker.deadline(), t0 + SEC * 5);
        assert_eq!(ticker.poll(late), None);
    }

    #[test]
    fn slightly_late_tick_does_not_drift() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(SEC, t0);
        ticker.poll(t0 + Duration::from_millis(20));
        assert_eq!(ticker.deadline(), t0 + SEC);
    }
}
