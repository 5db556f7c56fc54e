//! Shady engine crate.
//!
//! Window runtime, GPU context, shader stages, vertex data, and the draw-list
//! renderer used by the triangle program.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shader;
pub mod window;
