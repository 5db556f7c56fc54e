//! Vertex data and its GPU upload.

mod buffer;
mod vertex;

pub use buffer::VertexBuffer;
pub use vertex::{Vertex, TRIANGLE};
