use crate::phrase::{FIVE, HALF, PAST, QUARTER, TEN, TO, TWENTY};

/// Which hour a bucket's phrase is anchored to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HourAnchor {
    /// "{H} O'CLOCK".
    OClock,
    /// "... PAST {H}".
    Past,
    /// "... TO {N}".
    To,
}

/// Five-minute window of the hour, closed-open: `[0,5)`, `[5,10)`, ..., `[55,60)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MinuteBucket {
    OClock,
    FivePast,
    TenPast,
    QuarterPast,
    TwentyPast,
    TwentyFivePast,
    HalfPast,
    TwentyFiveTo,
    TwentyTo,
    QuarterTo,
    TenTo,
    FiveTo,
}

impl MinuteBucket {
    /// All buckets in minute order.
    pub const ALL: [MinuteBucket; 12] = [
        MinuteBucket::OClock,
        MinuteBucket::FivePast,
        MinuteBucket::TenPast,
        MinuteBucket::QuarterPast,
        MinuteBucket::TwentyPast,
        MinuteBucket::TwentyFivePast,
        MinuteBucket::HalfPast,
        MinuteBucket::TwentyFiveTo,
        MinuteBucket::TwentyTo,
        MinuteBucket::QuarterTo,
        MinuteBucket::TenTo,
        MinuteBucket::FiveTo,
    ];

    /// Classifies a minute. Values past 59 saturate into the last bucket.
    #[inline]
    pub const fn from_minute(minute: u32) -> Self {
        let i = minute / 5;
        Self::ALL[if i > 11 { 11 } else { i as usize }]
    }

    /// Position in [`MinuteBucket::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// First minute covered by this bucket.
    #[inline]
    pub const fn start_minute(self) -> u32 {
        self.index() as u32 * 5
    }

    #[inline]
    pub const fn anchor(self) -> HourAnchor {
        match self {
            MinuteBucket::OClock => HourAnchor::OClock,
            MinuteBucket::FivePast
            | MinuteBucket::TenPast
            | MinuteBucket::QuarterPast
            | MinuteBucket::TwentyPast
            | MinuteBucket::TwentyFivePast
            | MinuteBucket::HalfPast => HourAnchor::Past,
            _ => HourAnchor::To,
        }
    }

    /// Words between "IT'S" and the hour token, in reading order.
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            MinuteBucket::OClock => &[],
            MinuteBucket::FivePast => &[FIVE, PAST],
            MinuteBucket::TenPast => &[TEN, PAST],
            MinuteBucket::QuarterPast => &[QUARTER, PAST],
            MinuteBucket::TwentyPast => &[TWENTY, PAST],
            MinuteBucket::TwentyFivePast => &[TWENTY, FIVE, PAST],
            MinuteBucket::HalfPast => &[HALF, PAST],
            MinuteBucket::TwentyFiveTo => &[TWENTY, FIVE, TO],
            MinuteBucket::TwentyTo => &[TWENTY, TO],
            MinuteBucket::QuarterTo => &[QUARTER, TO],
            MinuteBucket::TenTo => &[TEN, TO],
            MinuteBucket::FiveTo => &[FIVE, TO],
        }
    }
}
