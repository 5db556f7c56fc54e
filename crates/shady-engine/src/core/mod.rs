//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the program
//! it drives, plus the loop state and teardown sequencing both sides share.

mod app;
mod ctx;
mod lifecycle;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use lifecycle::{FrameCounter, LoopState, Stage, Teardown};
