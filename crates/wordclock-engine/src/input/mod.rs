//! Keyboard input subsystem.
//!
//! The clock only reacts to window-management keys, so the public API is a
//! small platform-agnostic key model. The runtime translates winit events
//! through `platform::winit`.

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers};
