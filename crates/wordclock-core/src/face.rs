use crate::phrase::{Phrase, DIAL, DIAL_LEN};
use crate::selector::Selection;

/// Which dial phrases are lit, indexed like the dial.
pub type LitMask = [bool; DIAL_LEN];

/// The immutable part of a clock face: its ring of phrases.
#[derive(Debug, Copy, Clone)]
pub struct ClockFace {
    phrases: &'static [Phrase; DIAL_LEN],
}

impl ClockFace {
    #[inline]
    pub const fn new(phrases: &'static [Phrase; DIAL_LEN]) -> Self {
        Self { phrases }
    }

    #[inline]
    pub fn phrases(&self) -> &'static [Phrase; DIAL_LEN] {
        self.phrases
    }

    /// A phrase is lit iff its text is one of the selection's tokens.
    pub fn lit(&self, selection: &Selection) -> LitMask {
        let mut mask = [false; DIAL_LEN];
        for (slot, phrase) in mask.iter_mut().zip(self.phrases.iter()) {
            *slot = selection.contains(phrase.text);
        }
        mask
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(&DIAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select_hm;

    fn lit_texts(h: u32, m: u32) -> Vec<&'static str> {
        let face = ClockFace::default();
        let mask = face.lit(&select_hm(h, m).unwrap());
        face.phrases()
            .iter()
            .zip(mask)
            .filter_map(|(p, on)| on.then_some(p.text))
            .collect()
    }

    #[test]
    fn twenty_five_to_lights_four_phrases() {
        assert_eq!(lit_texts(6, 37), ["IT'S", "FIVE", "TO", "TWENTY"]);
    }

    #[test]
    fn on_the_hour_lights_only_its() {
        assert_eq!(lit_texts(6, 2), ["IT'S"]);
    }

    #[test]
    fn quarter_past() {
        assert_eq!(lit_texts(6, 15), ["IT'S", "A QUARTER", "PAST"]);
    }

    #[test]
    fn qualifiers_never_light() {
        let face = ClockFace::default();
        for h in 0..24 {
            for m in 0..60 {
                let mask = face.lit(&select_hm(h, m).unwrap());
                // JUST AFTER, NEARLY, ALMOST, A LITTLE
                for i in [1, 2, 10, 11] {
                    assert!(!mask[i], "{h}:{m:02} lit {}", face.phrases()[i].text);
                }
            }
        }
    }

    #[test]
    fn its_is_always_lit() {
        let face = ClockFace::default();
        for m in 0..60 {
            assert!(face.lit(&select_hm(10, m).unwrap())[0]);
        }
    }
}
