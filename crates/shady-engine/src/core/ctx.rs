use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::render::RenderTarget;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    /// Number of frames presented before this one.
    pub frame_index: u64,

    pub(crate) presented: bool,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    pub(crate) fn new(window: &'a Window, gpu: &'a mut Gpu<'w>, frame_index: u64) -> Self {
        Self {
            window,
            gpu,
            frame_index,
            presented: false,
        }
    }

    /// Acquires the next surface frame, calls `draw` with a ready
    /// [`RenderTarget`], then submits and presents.
    ///
    /// Surface errors are resolved here: recoverable ones skip the frame,
    /// fatal ones return [`AppControl::Exit`].
    pub fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        self.presented = true;

        AppControl::Continue
    }
}
