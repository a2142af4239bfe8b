use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::time::Tick;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// State changes happen in `on_tick`; `on_frame` only paints whatever the
/// last tick left behind, so resizes and expose events never re-read time.
pub trait App {
    /// Called when the runtime's ticker fires, before windows redraw.
    fn on_tick(&mut self, tick: Tick) -> AppControl;

    /// Called for raw window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
