//! Time subsystem.
//!
//! - `Ticker`: fixed-interval schedule the runtime sleeps on (one per runtime)
//! - `FrameClock`: per-window frame timing, `tick()` once per presented frame

mod frame_clock;
mod ticker;

pub use frame_clock::{FrameClock, FrameTime};
pub use ticker::{Tick, Ticker};
