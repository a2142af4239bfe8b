/// Viewport size in logical pixels.
///
/// Renderers upload this to their viewport uniform to map logical px to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Uniform scale that fits a `design` canvas inside this viewport,
    /// preserving aspect ratio.
    #[inline]
    pub fn fit_scale(self, design: Viewport) -> f32 {
        if !self.is_valid() || !design.is_valid() {
            return 1.0;
        }
        (self.width / design.width).min(self.height / design.height)
    }
}
