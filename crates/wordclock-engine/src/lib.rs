//! Word clock engine crate.
//!
//! Owns the platform + GPU runtime pieces the clock faces are drawn with:
//! a winit event loop that wakes on a fixed tick, a wgpu surface per window,
//! and circle/text renderers fed by a per-frame draw list.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
