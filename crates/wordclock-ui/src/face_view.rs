use wordclock_core::{ClockFace, ZoneReading, ZoneSpec};
use wordclock_engine::coords::Vec2;
use wordclock_engine::scene::{DrawList, ZIndex};

use crate::layout::FaceLayout;
use crate::theme::{FaceFonts, Theme};

/// One piece of text on a face.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub lit: bool,
}

impl Label {
    fn new(text: impl Into<String>, position: Vec2) -> Self {
        Self { text: text.into(), position, lit: false }
    }
}

/// The labels of a zone caption block (multi-zone faces only).
#[derive(Debug, Clone, PartialEq)]
struct Captions {
    meridiem: Label,
    title: Label,
    city: Label,
}

/// A clock face's label set.
///
/// The view owns its labels. Phrase text and positions are fixed at
/// construction; [`refresh`](Self::refresh) only flips lit flags and swaps
/// the dynamic texts, and [`paint`](Self::paint) records draw commands.
#[derive(Debug, Clone)]
pub struct ClockFaceView {
    face: ClockFace,
    layout: FaceLayout,
    phrases: Vec<Label>,
    center: Label,
    captions: Option<Captions>,
}

impl ClockFaceView {
    /// A bare face: dial phrases and the center hour.
    pub fn new(face: ClockFace, layout: FaceLayout) -> Self {
        let phrases = face
            .phrases()
            .iter()
            .map(|p| Label::new(p.text, layout.phrase_position(p.angle_deg)))
            .collect();

        Self {
            face,
            layout,
            phrases,
            center: Label { lit: true, ..Label::new("", layout.center) },
            captions: None,
        }
    }

    /// Adds the AM/PM label and the zone's title and city below the dial.
    pub fn with_captions(mut self, spec: &ZoneSpec) -> Self {
        self.captions = Some(Captions {
            meridiem: Label { lit: true, ..Label::new("", self.layout.meridiem_position()) },
            title: Label::new(spec.title, self.layout.title_position()),
            city: Label::new(spec.city, self.layout.city_position()),
        });
        self
    }

    #[inline]
    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    #[inline]
    pub fn phrases(&self) -> &[Label] {
        &self.phrases
    }

    #[inline]
    pub fn center(&self) -> &Label {
        &self.center
    }

    /// Current AM/PM text, if this face has captions.
    pub fn meridiem(&self) -> Option<&str> {
        self.captions.as_ref().map(|c| c.meridiem.text.as_str())
    }

    /// Applies a reading: lit flags, center text and AM/PM.
    pub fn refresh(&mut self, reading: &ZoneReading) {
        let mask = self.face.lit(&reading.selection);
        for (label, lit) in self.phrases.iter_mut().zip(mask) {
            label.lit = lit;
        }

        if self.center.text != reading.selection.center {
            self.center.text.clone_from(&reading.selection.center);
        }

        if let Some(captions) = self.captions.as_mut() {
            let text = reading.meridiem.as_str();
            if captions.meridiem.text != text {
                captions.meridiem.text = text.to_string();
            }
        }
    }

    /// Records this face into `list`.
    pub fn paint(&self, list: &mut DrawList, fonts: &FaceFonts, theme: &Theme) {
        if let Some(ring) = theme.dial_ring {
            // Outside the phrase centers so the widest phrase clears it.
            list.push_ring(ZIndex::BACKDROP, self.layout.center, self.layout.radius + 40.0, 1.0, ring);
        }

        for label in &self.phrases {
            let color = if label.lit { theme.lit } else { theme.idle };
            list.push_text_centered(
                ZIndex::LABEL,
                label.text.as_str(),
                fonts.for_lit(label.lit),
                theme.phrase_size,
                color,
                label.position,
            );
        }

        if !self.center.text.is_empty() {
            list.push_text_centered(
                ZIndex::LABEL,
                self.center.text.as_str(),
                fonts.bold,
                theme.center_size,
                theme.lit,
                self.center.position,
            );
        }

        let Some(c) = self.captions.as_ref() else { return };

        if !c.meridiem.text.is_empty() {
            list.push_text_centered(
                ZIndex::LABEL,
                c.meridiem.text.as_str(),
                fonts.regular,
                theme.meridiem_size,
                theme.lit,
                c.meridiem.position,
            );
        }
        for (label, size) in [(&c.title, theme.title_size), (&c.city, theme.city_size)] {
            if label.text.is_empty() {
                continue;
            }
            list.push_text_centered(
                ZIndex::LABEL,
                label.text.as_str(),
                fonts.regular,
                size,
                theme.caption,
                label.position,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordclock_core::{select_hm, Meridiem, TimeSample, WORLD_ZONES};
    use wordclock_engine::scene::{DrawCmd, TextCmd};
    use wordclock_engine::text::FontId;

    fn reading(h: u32, m: u32, inverted: bool) -> ZoneReading {
        ZoneReading {
            sample: TimeSample::new(h, m).unwrap(),
            selection: select_hm(h, m).unwrap(),
            meridiem: Meridiem::of(h, inverted),
        }
    }

    fn view() -> ClockFaceView {
        ClockFaceView::new(ClockFace::default(), FaceLayout::at(Vec2::new(200.0, 200.0)))
    }

    fn fonts() -> FaceFonts {
        FaceFonts::new(FontId::from_raw(0), Some(FontId::from_raw(1)))
    }

    fn texts(list: &mut DrawList) -> Vec<TextCmd> {
        list.iter_in_paint_order()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn new_view_places_twelve_unlit_phrases() {
        let v = view();
        assert_eq!(v.phrases().len(), 12);
        assert!(v.phrases().iter().all(|l| !l.lit));
        assert_eq!(v.phrases()[0].text, "IT'S");
        assert_eq!(v.center().text, "");
        assert_eq!(v.meridiem(), None);
    }

    #[test]
    fn refresh_lights_selection() {
        let mut v = view();
        v.refresh(&reading(15, 7, false));
        let lit: Vec<&str> =
            v.phrases().iter().filter(|l| l.lit).map(|l| l.text.as_str()).collect();
        assert_eq!(lit, ["IT'S", "FIVE", "PAST"]);
        assert_eq!(v.center().text, "3");
    }

    #[test]
    fn refresh_clears_previous_highlight() {
        let mut v = view();
        v.refresh(&reading(11, 47, false));
        assert_eq!(v.center().text, "12");
        v.refresh(&reading(12, 0, false));
        let lit: Vec<&str> =
            v.phrases().iter().filter(|l| l.lit).map(|l| l.text.as_str()).collect();
        assert_eq!(lit, ["IT'S"]);
        assert_eq!(v.center().text, "12 O'CLOCK");
    }

    #[test]
    fn captions_show_meridiem() {
        let mut v = view().with_captions(&WORLD_ZONES[2]);
        v.refresh(&reading(0, 10, true));
        assert_eq!(v.meridiem(), Some("PM"));
        v.refresh(&reading(0, 10, false));
        assert_eq!(v.meridiem(), Some("AM"));
    }

    #[test]
    fn paint_bare_face() {
        let mut v = view();
        v.refresh(&reading(6, 37, false));

        let mut list = DrawList::new();
        v.paint(&mut list, &fonts(), &Theme::default());

        let theme = Theme::default();
        let t = texts(&mut list);
        assert_eq!(t.len(), 13, "12 phrases + center");

        let lit: Vec<&str> =
            t.iter().filter(|c| c.color == theme.lit).map(|c| c.text.as_str()).collect();
        assert_eq!(lit, ["IT'S", "FIVE", "TO", "TWENTY", "7"]);

        let center = t.iter().find(|c| c.text == "7").unwrap();
        assert_eq!(center.origin, Vec2::new(200.0, 200.0));
        assert_eq!(center.size, theme.center_size);
        assert_eq!(center.font, FontId::from_raw(1));
    }

    #[test]
    fn paint_captioned_face() {
        let mut v = view().with_captions(&WORLD_ZONES[0]);
        v.refresh(&reading(9, 0, false));

        let mut list = DrawList::new();
        v.paint(&mut list, &fonts(), &Theme::default());
        let t = texts(&mut list);

        for want in ["AM", "Pacific Time (PT)", "Los Angeles"] {
            assert!(t.iter().any(|c| c.text == want), "missing {want}");
        }
        let city = t.iter().find(|c| c.text == "Los Angeles").unwrap();
        assert_eq!(city.origin, Vec2::new(200.0, 430.0));
    }

    #[test]
    fn ring_paints_behind_labels() {
        let v = view();
        let mut list = DrawList::new();
        v.paint(&mut list, &fonts(), &Theme::default());
        let first = list.iter_in_paint_order().next().map(|i| i.cmd.clone());
        assert!(matches!(first, Some(DrawCmd::Circle(_))));

        let mut list = DrawList::new();
        let theme = Theme { dial_ring: None, ..Theme::default() };
        v.paint(&mut list, &fonts(), &theme);
        assert!(list.items().iter().all(|i| matches!(i.cmd, DrawCmd::Text(_))));
    }
}
