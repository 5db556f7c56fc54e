use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCounter, FrameCtx, LoopState, Stage, Teardown};
use crate::device::{Gpu, GpuInit};
use crate::render::RenderCtx;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shady".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, starts `app`, and renders until the window closes.
    ///
    /// Returns an error if the event loop, the window, its GPU context, or
    /// `App::on_start` fail. Teardown has already run when this returns.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    loop_state: LoopState,
    teardown: Teardown,
    frames: FrameCounter,

    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            loop_state: LoopState::Running,
            teardown: Teardown::default(),
            frames: FrameCounter::default(),
            failure: None,
        }
    }

    /// Creates the window and its GPU context, then starts the app.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to create GPU context for window")?;

        log::info!("window \"{}\" created", self.config.title);

        entry
            .with_gpu(|gpu| {
                let ctx = RenderCtx::new(gpu.device(), gpu.surface_format());
                self.app.on_start(&ctx)
            })
            .context("application start-up failed")?;

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
        Ok(())
    }

    /// Leaves the render loop and releases everything. Safe to call repeatedly.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.loop_state.request_close();

        let (app, entry) = (&mut self.app, &mut self.entry);
        let ran = self.teardown.run(|stage| match stage {
            Stage::Geometry | Stage::Program => app.release(stage),
            Stage::Window => drop(entry.take()),
            Stage::Platform => event_loop.exit(),
        });

        if ran {
            log::info!("shut down after {} presented frame(s)", self.frames.presented());
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (app, frames) = (&mut self.app, self.frames.presented());
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let (control, presented) = entry.with_mut(|fields| {
            let mut ctx = FrameCtx::new(fields.window, fields.gpu, frames);
            let control = app.on_frame(&mut ctx);
            (control, ctx.presented)
        });
        self.frames.record(presented);

        if control == AppControl::Exit {
            self.shutdown(event_loop);
        }
    }

    fn owns(&self, id: WindowId) -> bool {
        self.entry
            .as_ref()
            .is_some_and(|e| e.with_window(|w| w.id()) == id)
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || !self.loop_state.is_running() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            log::error!("{e:#}");
            self.failure = Some(e);
            self.shutdown(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.loop_state.is_running() {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: one frame per loop iteration.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.loop_state.is_running() || !self.owns(window_id) {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.shutdown(event_loop);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        self.shutdown(event_loop);
    }
}
