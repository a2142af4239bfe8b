//! Word clock faces on top of `wordclock-engine`.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`app`] | `Application` builder; drives refresh on every tick |
//! | [`face_view`] | `ClockFaceView`, the label set of one face |
//! | [`layout`] | radial placement and canvas arrangements |
//! | [`theme`] | colors, sizes and font handles |

pub mod app;
pub mod face_view;
pub mod layout;
pub mod theme;

pub use app::Application;
pub use face_view::{ClockFaceView, Label};
pub use layout::{CanvasLayout, FaceLayout};
pub use theme::{FaceFonts, Theme};
