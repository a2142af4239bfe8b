use std::fmt;

use crate::sample::TimeSample;

/// AM/PM designation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Designation for a 24-hour value.
    ///
    /// With `inverted` set the labels are swapped: midnight reads PM and noon
    /// reads AM. One zone of the multi-zone clock displays its time this way.
    #[inline]
    pub const fn of(hour24: u32, inverted: bool) -> Self {
        let am = hour24 < 12;
        if am != inverted { Meridiem::Am } else { Meridiem::Pm }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a sample as a 12-hour digital reading, e.g. `"9:05 PM"`.
pub fn format_clock(sample: TimeSample, inverted: bool) -> String {
    format!(
        "{}:{:02} {}",
        sample.hour12(),
        sample.minute(),
        Meridiem::of(sample.hour(), inverted)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_convention() {
        assert_eq!(Meridiem::of(0, false), Meridiem::Am);
        assert_eq!(Meridiem::of(11, false), Meridiem::Am);
        assert_eq!(Meridiem::of(12, false), Meridiem::Pm);
        assert_eq!(Meridiem::of(23, false), Meridiem::Pm);
    }

    #[test]
    fn inverted_midnight_reads_pm() {
        assert_eq!(Meridiem::of(0, false), Meridiem::Am);
        assert_eq!(Meridiem::of(0, true), Meridiem::Pm);
    }

    #[test]
    fn inverted_flips_every_hour() {
        for h in 0..24 {
            assert_ne!(Meridiem::of(h, false), Meridiem::of(h, true), "hour {h}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Meridiem::Am.to_string(), "AM");
        assert_eq!(Meridiem::Pm.to_string(), "PM");
    }

    #[test]
    fn format_pads_minutes() {
        let s = TimeSample::new(21, 5).unwrap();
        assert_eq!(format_clock(s, false), "9:05 PM");
        assert_eq!(format_clock(s, true), "9:05 AM");
    }

    #[test]
    fn format_midnight() {
        let s = TimeSample::new(0, 0).unwrap();
        assert_eq!(format_clock(s, false), "12:00 AM");
    }
}
