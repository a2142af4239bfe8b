//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, wires them to the GPU layer and
//! wakes the app on a fixed tick.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
