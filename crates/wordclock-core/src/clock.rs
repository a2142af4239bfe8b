use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// The render loop reads time only through this trait so faces can be driven
/// from a pinned instant in tests and previews.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub DateTime<Utc>);

impl TimeSource for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
