//! Application lifecycle: startup, frame loop, shutdown.

use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::config::AppConfig;
use crate::engine::graphics::{
    classify_surface_error, GpuContext, ReleaseReport, Renderer, SurfaceErrorAction,
};
use crate::engine::input::{InputAction, InputHandler};
use crate::engine::window::{Viewport, WindowAction, WindowManager};

pub struct App {
    config: AppConfig,
    window_manager: WindowManager,
    gpu: Option<GpuContext>,
    renderer: Option<Renderer>,
    input_handler: InputHandler,
    error: Option<anyhow::Error>,
    release_report: Option<ReleaseReport>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() || self.error.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("Initialization failed: {:#}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(action) = WindowManager::translate_event(&event) else {
            return;
        };
        match action {
            WindowAction::Close => {
                info!("Close requested");
                event_loop.exit();
            }
            WindowAction::Resize(size) => self.resize(size),
            WindowAction::Key { code, pressed } => {
                self.input_handler.handle_keyboard_input_event(code, pressed);
            }
            WindowAction::Redraw => self.redraw(event_loop),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            window_manager: WindowManager::new(),
            gpu: None,
            renderer: None,
            input_handler: InputHandler::new(),
            error: None,
            release_report: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = self.window_manager.create_window(event_loop, &self.config)?;

        let gpu = pollster::block_on(GpuContext::new(window, &self.config))?;
        // Store the context before building the pipeline so a failure there
        // still releases it through `shutdown`.
        let gpu = self.gpu.insert(gpu);

        let viewport = Viewport::new(gpu.config.width, gpu.config.height);
        let renderer =
            Renderer::new(&gpu.device, gpu.format(), viewport, self.config.clear_color)?;
        self.renderer = Some(renderer);
        info!("Setup complete");

        self.window_manager.request_redraw();
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.set_viewport(Viewport::from_size(new_size));
        }
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(new_size);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.input_handler.process_input() == InputAction::CloseWindow {
            event_loop.exit();
            return;
        }

        let (Some(renderer), Some(gpu)) = (&self.renderer, &self.gpu) else {
            return;
        };
        if let Err(e) = renderer.render(gpu) {
            match classify_surface_error(&e) {
                SurfaceErrorAction::Reconfigure => {
                    warn!("Surface {:?}, reconfiguring", e);
                    gpu.reconfigure();
                }
                SurfaceErrorAction::SkipFrame => warn!("Surface {:?}, skipping frame", e),
                SurfaceErrorAction::Fatal => {
                    error!("Render error: {:?}", e);
                    self.error = Some(anyhow!("rendering failed: {:?}", e));
                    event_loop.exit();
                    return;
                }
            }
        }

        self.window_manager.request_redraw();
    }

    /// Releases GPU handles, then the surface, then the window.
    fn shutdown(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            let report = renderer.release();
            if !report.is_complete() {
                warn!("Unexpected release counts: {:?}", report);
            }
            self.release_report = Some(report);
        }
        if self.gpu.take().is_some() {
            info!("GPU context released");
        }
        self.window_manager.destroy();
    }

    pub fn release_report(&self) -> Option<ReleaseReport> {
        self.release_report
    }

    /// The first fatal error seen, if any.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Opens the window and renders until it is closed.
pub fn run(config: AppConfig) -> Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| {
            error!("Failed to create event loop: {:?}", e);
            e
        })
        .context("cannot create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| {
            error!("Application error: {:?}", e);
            e
        })
        .context("event loop failed")?;

    app.into_result()
}
