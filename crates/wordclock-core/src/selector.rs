use crate::bucket::{HourAnchor, MinuteBucket};
use crate::phrase::{ITS, OCLOCK_SUFFIX};
use crate::sample::TimeSample;

/// Highlight set for one time sample.
///
/// `tokens` is in reading order ("IT'S", minute words, hour token). The last
/// token is always the hour token and doubles as the center text.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Selection {
    pub bucket: MinuteBucket,
    pub tokens: Vec<String>,
    pub center: String,
}

impl Selection {
    /// Returns true if `text` is one of the selected tokens.
    pub fn contains(&self, text: &str) -> bool {
        self.tokens.iter().any(|t| t == text)
    }

    /// The hour number the phrase refers to (current hour for PAST and
    /// O'CLOCK, next hour for TO).
    pub fn hour_token(&self) -> &str {
        self.tokens.last().map(String::as_str).unwrap_or_default()
    }
}

/// Maps a sample to the phrases to highlight and the center text.
pub fn select(sample: TimeSample) -> Selection {
    let bucket = MinuteBucket::from_minute(sample.minute());

    let hour_token = match bucket.anchor() {
        HourAnchor::OClock => format!("{} {OCLOCK_SUFFIX}", sample.hour12()),
        HourAnchor::Past => sample.hour12().to_string(),
        HourAnchor::To => sample.next_hour12().to_string(),
    };

    let words = bucket.words();
    let mut tokens = Vec::with_capacity(words.len() + 2);
    tokens.push(ITS.to_string());
    tokens.extend(words.iter().map(|w| w.to_string()));
    tokens.push(hour_token.clone());

    Selection { bucket, tokens, center: hour_token }
}

/// Validating entry point over raw 24-hour fields.
///
/// Returns `None` only when `hour >= 24` or `minute >= 60`.
pub fn select_hm(hour: u32, minute: u32) -> Option<Selection> {
    TimeSample::new(hour, minute).map(select)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(h: u32, m: u32) -> Selection { select_hm(h, m).unwrap() }

    fn tokens(h: u32, m: u32) -> Vec<String> { sel(h, m).tokens }

    #[test]
    fn every_minute_is_covered() {
        for h in 0..24 {
            for m in 0..60 {
                let s = sel(h, m);
                assert!(s.tokens.len() >= 2, "{h}:{m:02}");
                assert_eq!(s.tokens[0], ITS);
                assert!(!s.center.is_empty(), "{h}:{m:02}");
            }
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(select_hm(24, 0).is_none());
        assert!(select_hm(3, 60).is_none());
    }

    #[test]
    fn five_past_three() {
        let s = sel(3, 7);
        assert_eq!(s.tokens, ["IT'S", "FIVE", "PAST", "3"]);
        assert_eq!(s.center, "3");
    }

    #[test]
    fn quarter_to_twelve() {
        let s = sel(11, 47);
        assert_eq!(s.tokens, ["IT'S", "A QUARTER", "TO", "12"]);
        assert_eq!(s.center, "12");
    }

    #[test]
    fn on_the_hour_uses_oclock() {
        let s = sel(15, 4);
        assert_eq!(s.tokens, ["IT'S", "3 O'CLOCK"]);
        assert_eq!(s.center, "3 O'CLOCK");
    }

    #[test]
    fn midnight_reads_twelve() {
        assert_eq!(sel(0, 0).center, "12 O'CLOCK");
        assert_eq!(sel(0, 10).center, "12");
    }

    #[test]
    fn to_wraps_from_twelve_to_one() {
        assert_eq!(sel(12, 55).tokens, ["IT'S", "FIVE", "TO", "1"]);
        assert_eq!(sel(0, 35).tokens, ["IT'S", "TWENTY", "FIVE", "TO", "1"]);
    }

    #[test]
    fn full_table_at_one_pm() {
        let expected: [&[&str]; 12] = [
            &["IT'S", "1 O'CLOCK"],
            &["IT'S", "FIVE", "PAST", "1"],
            &["IT'S", "TEN", "PAST", "1"],
            &["IT'S", "A QUARTER", "PAST", "1"],
            &["IT'S", "TWENTY", "PAST", "1"],
            &["IT'S", "TWENTY", "FIVE", "PAST", "1"],
            &["IT'S", "HALF", "PAST", "1"],
            &["IT'S", "TWENTY", "FIVE", "TO", "2"],
            &["IT'S", "TWENTY", "TO", "2"],
            &["IT'S", "A QUARTER", "TO", "2"],
            &["IT'S", "TEN", "TO", "2"],
            &["IT'S", "FIVE", "TO", "2"],
        ];
        for (i, want) in expected.iter().enumerate() {
            let m = i as u32 * 5 + 2;
            assert_eq!(tokens(13, m), *want, "13:{m:02}");
        }
    }

    #[test]
    fn center_is_the_hour_token() {
        for m in 0..60 {
            let s = sel(9, m);
            assert_eq!(s.hour_token(), s.center);
        }
    }

    #[test]
    fn selection_is_pure() {
        assert_eq!(sel(7, 33), sel(7, 33));
        let _ = sel(8, 50);
        assert_eq!(sel(7, 33), sel(7, 33));
    }

    #[test]
    fn contains_matches_whole_tokens() {
        let s = sel(4, 16);
        assert!(s.contains("A QUARTER"));
        assert!(!s.contains("QUARTER"));
        assert!(!s.contains("TO"));
    }
}
