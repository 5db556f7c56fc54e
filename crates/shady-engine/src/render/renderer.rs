use crate::geometry::VertexBuffer;
use crate::scene::DrawList;
use crate::shader::Program;

use super::{plan_passes, RenderTarget};

/// Owns the GPU resources a draw list needs: one program and one vertex buffer.
///
/// The program is optional. Without it, `Draw` commands are skipped and only
/// clears reach the target.
pub struct Renderer {
    geometry: Option<VertexBuffer>,
    program: Option<Program>,

    warned_unbound: bool,
}

impl Renderer {
    pub fn new(program: Option<Program>, geometry: VertexBuffer) -> Self {
        Self {
            geometry: Some(geometry),
            program,
            warned_unbound: false,
        }
    }

    pub fn release_geometry(&mut self) {
        self.geometry = None;
    }

    pub fn release_program(&mut self) {
        self.program = None;
    }

    /// Records `list` into `target`, one render pass per planned pass.
    pub fn execute(&mut self, target: &mut RenderTarget<'_>, list: &DrawList) {
        let bound = self.program.as_ref().zip(self.geometry.as_ref());
        let plan = plan_passes(list, bound.is_some());

        if plan.skipped_draws > 0 && !self.warned_unbound {
            log::warn!("draw skipped: program or vertex buffer unavailable");
            self.warned_unbound = true;
        }

        for pass in &plan.passes {
            let load = match pass.clear {
                Some(color) => wgpu::LoadOp::Clear(color.to_wgpu()),
                None => wgpu::LoadOp::Load,
            };
            let mut rpass = begin_pass(target, load);

            if let (Some(vertices), Some((program, geometry))) = (pass.draw.clone(), bound) {
                debug_assert!(vertices.end <= geometry.vertex_count());
                rpass.set_pipeline(program.pipeline());
                rpass.set_vertex_buffer(0, geometry.slice());
                rpass.draw(vertices, 0..1);
            }
        }
    }
}

fn begin_pass<'e>(
    target: &'e mut RenderTarget<'_>,
    load: wgpu::LoadOp<wgpu::Color>,
) -> wgpu::RenderPass<'e> {
    target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("shady pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}
