//! Radial placement of a face and the canvas faces are arranged on.

use wordclock_engine::coords::{Vec2, Viewport};

/// Distance from a face's center to its phrases.
pub const DIAL_RADIUS: f32 = 150.0;

/// Horizontal pitch between faces on a multi-zone canvas.
pub const FACE_PITCH: f32 = 400.0;

/// Geometry of one face, in canvas coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceLayout {
    pub center: Vec2,
    pub radius: f32,
    /// Offsets below the center for the AM/PM, title and city labels.
    pub meridiem_dy: f32,
    pub title_dy: f32,
    pub city_dy: f32,
}

impl FaceLayout {
    pub fn at(center: Vec2) -> Self {
        Self {
            center,
            radius: DIAL_RADIUS,
            meridiem_dy: 50.0,
            title_dy: 200.0,
            city_dy: 230.0,
        }
    }

    /// Position of a phrase at `angle_deg`, measured clockwise from 12 o'clock.
    #[inline]
    pub fn phrase_position(&self, angle_deg: f32) -> Vec2 {
        self.center + Vec2::from_bearing(angle_deg, self.radius)
    }

    #[inline]
    pub fn meridiem_position(&self) -> Vec2 {
        self.below(self.meridiem_dy)
    }

    #[inline]
    pub fn title_position(&self) -> Vec2 {
        self.below(self.title_dy)
    }

    #[inline]
    pub fn city_position(&self) -> Vec2 {
        self.below(self.city_dy)
    }

    fn below(&self, dy: f32) -> Vec2 {
        self.center + Vec2::new(0.0, dy)
    }
}

/// Design-space canvas: its size, one layout per face and an optional
/// signature line.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    pub size: Viewport,
    pub faces: Vec<FaceLayout>,
    pub signature: Option<Vec2>,
}

impl CanvasLayout {
    /// 400×450 canvas, one face at (200, 200), signature at y = 430.
    pub fn single() -> Self {
        Self {
            size: Viewport::new(400.0, 450.0),
            faces: vec![FaceLayout::at(Vec2::new(200.0, 200.0))],
            signature: Some(Vec2::new(200.0, 430.0)),
        }
    }

    /// `count` faces side by side on a 600-tall canvas, 400 px apart.
    pub fn row(count: usize) -> Self {
        let count = count.max(1);
        let faces = (0..count)
            .map(|i| FaceLayout::at(Vec2::new(FACE_PITCH * 0.5 + FACE_PITCH * i as f32, 200.0)))
            .collect();
        Self {
            size: Viewport::new(FACE_PITCH * count as f32, 600.0),
            faces,
            signature: None,
        }
    }

    /// `single` for one face, `row` otherwise.
    pub fn for_faces(count: usize) -> Self {
        if count <= 1 { Self::single() } else { Self::row(count) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn twelve_oclock_is_straight_up() {
        let f = FaceLayout::at(Vec2::new(200.0, 200.0));
        assert!(close(f.phrase_position(0.0), Vec2::new(200.0, 50.0)));
    }

    #[test]
    fn quarter_turns() {
        let f = FaceLayout::at(Vec2::new(200.0, 200.0));
        assert!(close(f.phrase_position(90.0), Vec2::new(350.0, 200.0)));
        assert!(close(f.phrase_position(180.0), Vec2::new(200.0, 350.0)));
        assert!(close(f.phrase_position(270.0), Vec2::new(50.0, 200.0)));
    }

    #[test]
    fn phrases_sit_on_the_dial() {
        let f = FaceLayout::at(Vec2::new(600.0, 200.0));
        for deg in (0..360).step_by(30) {
            let d = (f.phrase_position(deg as f32) - f.center).length();
            assert!((d - DIAL_RADIUS).abs() < 1e-3, "{deg}°: {d}");
        }
    }

    #[test]
    fn captions_stack_below_center() {
        let f = FaceLayout::at(Vec2::new(1000.0, 200.0));
        assert_eq!(f.meridiem_position(), Vec2::new(1000.0, 250.0));
        assert_eq!(f.title_position(), Vec2::new(1000.0, 400.0));
        assert_eq!(f.city_position(), Vec2::new(1000.0, 430.0));
    }

    #[test]
    fn single_canvas() {
        let c = CanvasLayout::single();
        assert_eq!(c.size, Viewport::new(400.0, 450.0));
        assert_eq!(c.faces.len(), 1);
        assert_eq!(c.faces[0].center, Vec2::new(200.0, 200.0));
        assert_eq!(c.signature, Some(Vec2::new(200.0, 430.0)));
    }

    #[test]
    fn three_zone_row() {
        let c = CanvasLayout::row(3);
        assert_eq!(c.size, Viewport::new(1200.0, 600.0));
        let xs: Vec<f32> = c.faces.iter().map(|f| f.center.x).collect();
        assert_eq!(xs, [200.0, 600.0, 1000.0]);
        assert!(c.faces.iter().all(|f| f.center.y == 200.0));
        assert_eq!(c.signature, None);
    }

    #[test]
    fn for_faces_picks_variant() {
        assert_eq!(CanvasLayout::for_faces(1), CanvasLayout::single());
        assert_eq!(CanvasLayout::for_faces(3), CanvasLayout::row(3));
        assert_eq!(CanvasLayout::row(0).faces.len(), 1);
    }
}
