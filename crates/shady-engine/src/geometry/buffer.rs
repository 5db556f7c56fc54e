use wgpu::util::DeviceExt;

use super::Vertex;

/// Immutable GPU vertex buffer.
///
/// Created with `VERTEX` usage only, so the contents cannot change after upload.
pub struct VertexBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl VertexBuffer {
    /// Allocates a buffer sized for `vertices` and copies them in once.
    pub fn upload(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        log::debug!(
            "uploaded {} vertices ({} bytes) to {label}",
            vertices.len(),
            buffer.size()
        );

        Self {
            buffer,
            vertex_count: vertices.len() as u32,
        }
    }

    #[inline]
    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}
