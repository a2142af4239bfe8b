//! Phrase vocabulary and the fixed dial layout.

pub const ITS: &str = "IT'S";
pub const FIVE: &str = "FIVE";
pub const TEN: &str = "TEN";
pub const QUARTER: &str = "A QUARTER";
pub const TWENTY: &str = "TWENTY";
pub const HALF: &str = "HALF";
pub const PAST: &str = "PAST";
pub const TO: &str = "TO";

pub const JUST_AFTER: &str = "JUST AFTER";
pub const NEARLY: &str = "NEARLY";
pub const ALMOST: &str = "ALMOST";
pub const A_LITTLE: &str = "A LITTLE";

/// Suffix appended to the hour on the top of the hour.
pub const OCLOCK_SUFFIX: &str = "O'CLOCK";

/// A fixed token placed on the dial.
///
/// `angle_deg` is measured clockwise from 12 o'clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Phrase {
    pub text: &'static str,
    pub angle_deg: f32,
}

impl Phrase {
    #[inline]
    pub const fn new(text: &'static str, angle_deg: f32) -> Self {
        Self { text, angle_deg }
    }
}

/// Number of phrases on a dial.
pub const DIAL_LEN: usize = 12;

/// The twelve dial phrases in ring order, one every 30°.
///
/// The qualifier phrases (JUST AFTER, NEARLY, ALMOST, A LITTLE) are part of
/// the face artwork and are never lit by the phrase table.
pub const DIAL: [Phrase; DIAL_LEN] = [
    Phrase::new(ITS, 0.0),
    Phrase::new(JUST_AFTER, 30.0),
    Phrase::new(NEARLY, 60.0),
    Phrase::new(FIVE, 90.0),
    Phrase::new(TEN, 120.0),
    Phrase::new(QUARTER, 150.0),
    Phrase::new(HALF, 180.0),
    Phrase::new(TO, 210.0),
    Phrase::new(PAST, 240.0),
    Phrase::new(TWENTY, 270.0),
    Phrase::new(ALMOST, 300.0),
    Phrase::new(A_LITTLE, 330.0),
];
