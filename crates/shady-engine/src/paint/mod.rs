//! Color types shared by the scene and the renderer.

mod color;

pub use color::Color;
