//! Scene (draw stream) types.
//!
//! The app records a [`DrawList`] each frame; the renderer executes it. Keeping
//! the stream renderer-agnostic lets the per-frame command sequence be checked
//! without a GPU.

mod cmd;
mod list;

pub use cmd::DrawCmd;
pub use list::DrawList;
