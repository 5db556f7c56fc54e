use anyhow::Result;
use winit::event::WindowEvent;

use shady_engine::core::{App, AppControl, FrameCtx, LoopState, Stage};
use shady_engine::geometry::{Vertex, VertexBuffer, TRIANGLE};
use shady_engine::paint::Color;
use shady_engine::render::{RenderCtx, Renderer};
use shady_engine::scene::DrawList;
use shady_engine::shader::{Program, StageSource};

pub const CLEAR_COLOR: Color = Color::rgb(0.07, 0.13, 0.17);

pub const VERTEX_STAGE: StageSource = StageSource::vertex(
    "triangle vertex stage",
    include_str!("shaders/triangle.vert.wgsl"),
);

pub const FRAGMENT_STAGE: StageSource = StageSource::fragment(
    "triangle fragment stage",
    include_str!("shaders/triangle.frag.wgsl"),
);

/// Records one frame: clear, then draw every triangle vertex once.
pub fn record_frame(list: &mut DrawList) {
    list.clear();
    list.push_clear(CLEAR_COLOR);
    list.push_draw(0..TRIANGLE.len() as u32);
}

/// Keeps a program that failed to build out of the renderer.
///
/// The failure is logged once; frames then only clear.
fn usable_program<P>(built: Result<P>) -> Option<P> {
    match built {
        Ok(program) => Some(program),
        Err(e) => {
            log::error!("{e:#}; frames will only be cleared");
            None
        }
    }
}

/// Draws the static triangle until the window closes.
#[derive(Default)]
pub struct TriangleApp {
    state: LoopState,
    renderer: Option<Renderer>,
    draw_list: DrawList,
}

impl TriangleApp {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Records the next frame, or `None` once closing.
    pub fn next_frame(&mut self) -> Option<&DrawList> {
        if !self.state.is_running() {
            return None;
        }
        record_frame(&mut self.draw_list);
        Some(&self.draw_list)
    }
}

impl App for TriangleApp {
    fn on_start(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let layout = [Vertex::layout()];
        let program = usable_program(Program::build(ctx, &VERTEX_STAGE, &FRAGMENT_STAGE, &layout));

        let geometry = VertexBuffer::upload(ctx.device, "triangle vertices", &TRIANGLE);
        self.renderer = Some(Renderer::new(program, geometry));

        log::info!("triangle ready");
        Ok(())
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if matches!(event, WindowEvent::CloseRequested) {
            self.state.request_close();
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.next_frame().is_none() {
            return AppControl::Exit;
        }
        let (list, Some(renderer)) = (&self.draw_list, self.renderer.as_mut()) else {
            return AppControl::Continue;
        };

        log::trace!("frame {}", ctx.frame_index);
        ctx.render(|target| renderer.execute(target, list))
    }

    fn release(&mut self, stage: Stage) {
        self.state.request_close();
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match stage {
            Stage::Geometry => renderer.release_geometry(),
            Stage::Program => {
                renderer.release_program();
                self.renderer = None;
            }
            Stage::Window | Stage::Platform => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shady_engine::render::{plan_passes, PassPlan};
    use shady_engine::scene::DrawCmd;
    use shady_engine::shader::check_program;

    #[test]
    fn frame_is_one_clear_then_one_three_vertex_draw() {
        let mut app = TriangleApp::new();
        let list = app.next_frame().unwrap();

        assert_eq!(
            list.commands(),
            &[
                DrawCmd::Clear(CLEAR_COLOR),
                DrawCmd::Draw { vertices: 0..3 },
            ]
        );
    }

    #[test]
    fn every_frame_records_the_same_commands() {
        let mut app = TriangleApp::new();
        let first = app.next_frame().unwrap().clone();

        for _ in 0..100 {
            let list = app.next_frame().unwrap();
            assert_eq!(list, &first);
        }
    }

    #[test]
    fn close_request_stops_frames() {
        let mut app = TriangleApp::new();
        assert!(app.next_frame().is_some());

        let control = app.on_window_event(&WindowEvent::CloseRequested);
        assert_eq!(control, AppControl::Continue);
        assert_eq!(app.state(), LoopState::Closing);
        assert!(app.next_frame().is_none());
    }

    #[test]
    fn other_events_keep_running() {
        let mut app = TriangleApp::new();
        app.on_window_event(&WindowEvent::Focused(false));
        assert!(app.state().is_running());
    }

    #[test]
    fn release_without_start_is_harmless() {
        let mut app = TriangleApp::new();
        for stage in Stage::TEARDOWN_ORDER {
            app.release(stage);
        }
        assert!(app.next_frame().is_none());
    }

    #[test]
    fn clear_color_is_fixed() {
        assert_eq!(CLEAR_COLOR, Color::rgba(0.07, 0.13, 0.17, 1.0));
    }

    #[test]
    fn shader_stages_pass_front_end_checks() {
        let checked = check_program(&VERTEX_STAGE, &FRAGMENT_STAGE);
        assert!(checked.is_ok(), "{checked:?}");
    }

    #[test]
    fn failed_program_build_is_dropped() {
        let built: Result<u32> = Err(anyhow::anyhow!("shader stages failed to compile: vs"));
        assert_eq!(usable_program(built), None);
        assert_eq!(usable_program(Ok(7)), Some(7));
    }

    #[test]
    fn frame_with_program_clears_and_draws_in_one_pass() {
        let mut app = TriangleApp::new();
        let plan = plan_passes(app.next_frame().unwrap(), true);

        assert_eq!(
            plan.passes,
            [PassPlan {
                clear: Some(CLEAR_COLOR),
                draw: Some(0..3),
            }]
        );
        assert_eq!(plan.skipped_draws, 0);
    }

    #[test]
    fn frame_without_program_only_clears() {
        let mut app = TriangleApp::new();
        let plan = plan_passes(app.next_frame().unwrap(), false);

        assert_eq!(
            plan.passes,
            [PassPlan {
                clear: Some(CLEAR_COLOR),
                draw: None,
            }]
        );
        assert_eq!(plan.skipped_draws, 1);
    }

    #[test]
    fn fragment_stage_writes_fixed_color() {
        assert!(FRAGMENT_STAGE.wgsl.contains("vec4<f32>(0.8, 0.3, 0.02, 1.0)"));
    }
}
