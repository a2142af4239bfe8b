//! Shape renderers.

mod common;

pub mod circle;
pub mod text;

pub use circle::CircleRenderer;
pub use text::TextRenderer;
