use wordclock_engine::paint::Color;
use wordclock_engine::text::FontId;

/// Colors and type sizes of a clock face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    /// Unlit dial phrases.
    pub idle: Color,
    /// Lit phrases, the center hour and the AM/PM label.
    pub lit: Color,
    /// Zone title, city and signature.
    pub caption: Color,
    /// Thin ring drawn outside the phrases; `None` disables it.
    pub dial_ring: Option<Color>,

    pub phrase_size: f32,
    pub center_size: f32,
    pub meridiem_size: f32,
    pub title_size: f32,
    pub city_size: f32,
    pub signature_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::black(),
            idle: Color::from_hex(0xbebebe),
            lit: Color::from_hex(0xff69b4),
            caption: Color::from_hex(0x888888),
            dial_ring: Some(Color::from_hex(0x1c1c1c)),
            phrase_size: 14.0,
            center_size: 24.0,
            meridiem_size: 16.0,
            title_size: 12.0,
            city_size: 10.0,
            signature_size: 10.0,
        }
    }
}

/// Font handles a face paints with.
///
/// `bold` falls back to `regular` when no bold face was supplied.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FaceFonts {
    pub regular: FontId,
    pub bold: FontId,
}

impl FaceFonts {
    #[inline]
    pub fn new(regular: FontId, bold: Option<FontId>) -> Self {
        Self { regular, bold: bold.unwrap_or(regular) }
    }

    #[inline]
    pub fn for_lit(&self, lit: bool) -> FontId {
        if lit { self.bold } else { self.regular }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lit_color_is_hot_pink() {
        let theme = Theme::default();
        assert_eq!(theme.lit, Color::from_hex(0xff69b4));
        assert_ne!(theme.lit, theme.idle);
        assert_eq!(theme.background, Color::black());
    }

    #[test]
    fn center_is_larger_than_phrases() {
        let theme = Theme::default();
        assert!(theme.center_size > theme.phrase_size);
        assert!(theme.city_size <= theme.title_size);
    }

    #[test]
    fn bold_falls_back_to_regular() {
        let regular = FontId::from_raw(0);
        let fonts = FaceFonts::new(regular, None);
        assert_eq!(fonts.for_lit(true), regular);
        assert_eq!(fonts.for_lit(false), regular);
    }

    #[test]
    fn lit_phrases_use_bold() {
        let fonts = FaceFonts::new(FontId::from_raw(0), Some(FontId::from_raw(1)));
        assert_eq!(fonts.for_lit(true), FontId::from_raw(1));
        assert_eq!(fonts.for_lit(false), FontId::from_raw(0));
    }
}
