//! GPU rendering subsystem.
//!
//! A recorded `scene::DrawList` is first planned into passes, then the renderer
//! records those passes with the program and vertex buffer it owns.

mod ctx;
mod plan;
mod renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use plan::{plan_passes, FramePlan, PassPlan};
pub use renderer::Renderer;
