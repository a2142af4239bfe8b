//! Paint model shared between the face view and renderers.
//!
//! Colors are linear premultiplied alpha. Geometry types live in `coords`.

pub mod color;

pub use color::Color;
