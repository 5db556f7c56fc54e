use std::ops::Range;

use crate::paint::Color;

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the color target.
    Clear(Color),
    /// Draw `vertices` from the bound vertex buffer as a triangle list, one instance.
    Draw { vertices: Range<u32> },
}
