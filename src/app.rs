use std::sync::Arc;

use anyhow::{Context, Result};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Window, WindowId},
};

use crate::config::SceneConfig;
use crate::core::{Clock, FpsMeter, PointerSource, WinitController};
use crate::renderer::Renderer;
use crate::textures::TextureSet;
use crate::world::World;

const FPS_REPORT_INTERVAL: f32 = 1.0;

/// Window, GPU and frame loop around a [`World`]
pub struct App {
    config: SceneConfig,
    world: World,
    textures: TextureSet,
    input: WinitController,
    clock: Clock,
    fps: FpsMeter,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: SceneConfig, world: World, textures: TextureSet) -> Self {
        let [px, py] = config.camera.initial_pointer;
        Self {
            config,
            world,
            textures,
            input: WinitController::new((px, py)),
            clock: Clock::new(),
            fps: FpsMeter::new(FPS_REPORT_INTERVAL),
            window: None,
            renderer: None,
            error: None,
        }
    }

    /// Error that stopped the event loop, if any
    pub fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_config = &self.config.window;
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(window_config.title.clone())
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        window_config.width,
                        window_config.height,
                    )),
            )
            .context("Failed to create window")?;
        let window = Arc::new(window);

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            window_config,
            &self.config.lighting,
            &self.textures,
        ))
        .context("Failed to initialize renderer")?;

        let source = Self::capture_pointer(&window);
        self.input.set_pointer_source(source);
        self.world.camera.activate_pointer();

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
        Ok(())
    }

    /// Hide and grab the cursor. A locked cursor stops reporting positions,
    /// so raw motion drives the pointer in that case.
    fn capture_pointer(window: &Window) -> PointerSource {
        window.set_cursor_visible(false);

        if window.set_cursor_grab(CursorGrabMode::Locked).is_ok() {
            return PointerSource::RawMotion;
        }
        if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
            log::warn!("Cursor grab unavailable: {e}");
        }
        PointerSource::Cursor
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.frame(delta) {
            log::debug!("FPS: {fps:.1}");
        }

        self.world.step(delta);

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let items = self.world.draw_items();
        match renderer.render(&self.world.view(), &items) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = renderer.size();
                renderer.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.error = Some(anyhow::anyhow!("GPU out of memory"));
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = self.input.process_window_event(&event) {
            if self.world.handle_input(input) {
                event_loop.exit();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    let source = Self::capture_pointer(window);
                    self.input.set_pointer_source(source);
                }
                self.world.camera.activate_pointer();
            }
            WindowEvent::Focused(false) => self.world.on_focus_lost(),
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let Some(input) = self.input.process_device_event(&event) {
            self.world.handle_input(input);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
