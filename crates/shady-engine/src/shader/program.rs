use anyhow::{bail, Result};

use crate::render::RenderCtx;

use super::{check_program, StageKind, StageSource};

/// A stage created on the device. Lives only until [`link`] consumes it.
struct CompiledStage {
    label: &'static str,
    module: wgpu::ShaderModule,
}

/// Creates the device module for a stage that already passed the CPU check.
fn compile(device: &wgpu::Device, source: &StageSource) -> CompiledStage {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(source.label),
        source: wgpu::ShaderSource::Wgsl(source.wgsl.into()),
    });

    log::debug!("compiled {:?} stage {}", source.kind, source.label);

    CompiledStage {
        label: source.label,
        module,
    }
}

/// Linked vertex + fragment stages targeting the surface format.
pub struct Program {
    pipeline: wgpu::RenderPipeline,
}

impl Program {
    /// Checks both stages, compiles them, and links them.
    ///
    /// Each stage is checked independently and its diagnostics are logged once.
    /// The returned error only names the failing stages. Link-time validation
    /// errors are captured and returned instead of reaching the device's
    /// uncaptured-error handler.
    pub fn build(
        ctx: &RenderCtx<'_>,
        vertex: &StageSource,
        fragment: &StageSource,
        buffers: &[wgpu::VertexBufferLayout<'_>],
    ) -> Result<Self> {
        let checked = check_program(vertex, fragment);
        checked.report();
        if !checked.is_ok() {
            bail!(
                "shader stages failed to compile: {}",
                checked.failed_stages().join(", ")
            );
        }

        let vs = compile(ctx.device, vertex);
        let fs = compile(ctx.device, fragment);
        link(ctx, vs, fs, buffers)
    }

    #[inline]
    pub fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

/// Links two stages into a triangle-list pipeline.
///
/// Both stages are dropped once the pipeline exists.
fn link(
    ctx: &RenderCtx<'_>,
    vertex: CompiledStage,
    fragment: CompiledStage,
    buffers: &[wgpu::VertexBufferLayout<'_>],
) -> Result<Program> {
    let scope = ctx.device.push_error_scope(wgpu::ErrorFilter::Validation);

    let layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shady program layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

    let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("shady program"),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module: &vertex.module,
            entry_point: Some(StageKind::Vertex.entry_point()),
            compilation_options: Default::default(),
            buffers,
        },

        fragment: Some(wgpu::FragmentState {
            module: &fragment.module,
            entry_point: Some(StageKind::Fragment.entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(scope.pop()) {
        bail!("failed to link {} + {}: {err}", vertex.label, fragment.label);
    }

    log::debug!("linked {} + {}", vertex.label, fragment.label);
    drop(vertex);
    drop(fragment);

    Ok(Program { pipeline })
}
