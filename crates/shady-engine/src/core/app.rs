use anyhow::Result;
use winit::event::WindowEvent;

use crate::render::RenderCtx;

use super::ctx::FrameCtx;
use super::lifecycle::Stage;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by `window::Runtime`.
pub trait App {
    /// Called once, after the window and its GPU context exist and before the
    /// first frame. An error here ends the run.
    fn on_start(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Releases app-owned resources belonging to `stage`.
    ///
    /// The runtime calls this for `Stage::Geometry` and `Stage::Program` during
    /// teardown, in that order, before it destroys the window.
    fn release(&mut self, stage: Stage) {
        let _ = stage;
    }
}
