use chrono::Timelike;

/// Wall-clock time read at refresh.
///
/// Invariant: `hour < 24` and `minute < 60`. Every constructor enforces it,
/// so everything downstream of a `TimeSample` is total.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TimeSample {
    hour: u8,
    minute: u8,
}

impl TimeSample {
    /// Builds a sample from raw 24-hour fields, rejecting out-of-range values.
    #[inline]
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour: hour as u8, minute: minute as u8 })
        } else {
            None
        }
    }

    /// Samples any chrono time value (`NaiveTime`, `DateTime<Tz>`, ...).
    #[inline]
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        // chrono guarantees hour() < 24 and minute() < 60.
        Self { hour: t.hour() as u8, minute: t.minute() as u8 }
    }

    /// Hour in 24-hour form (0–23).
    #[inline]
    pub const fn hour(self) -> u32 {
        self.hour as u32
    }

    /// Minute of the hour (0–59).
    #[inline]
    pub const fn minute(self) -> u32 {
        self.minute as u32
    }

    /// Hour on a 12-hour dial (1–12). Midnight and noon are both 12.
    #[inline]
    pub const fn hour12(self) -> u32 {
        match self.hour % 12 {
            0 => 12,
            h => h as u32,
        }
    }

    /// The hour a "TO" phrase refers to (1–12, wrapping 12 → 1).
    #[inline]
    pub const fn next_hour12(self) -> u32 {
        self.hour12() % 12 + 1
    }
}
