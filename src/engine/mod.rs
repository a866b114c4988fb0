pub mod core;
pub mod draw;
pub mod gui;
pub mod input;
pub mod renderer;
pub mod resources;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use self::core::{EngineConfig, FrameTiming};
use glam::Vec2;
use gui::{EguiCanvas, Gui};
use input::Controls;
use renderer::Renderer;
use resources::TextureTable;
use wgpu::SurfaceError;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

use crate::game::{Frame, Game};

const MINIMIZED_POLL: Duration = Duration::from_millis(10);

pub struct EngineApp {
    config: EngineConfig,
    game: Box<dyn Game>,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    gui: Option<Gui>,
    textures: Option<TextureTable>,
    timing: FrameTiming,
    last_frame: Instant,
    failure: Option<anyhow::Error>,
}

impl EngineApp {
    pub fn new(config: EngineConfig, game: impl Game + 'static) -> Self {
        Self {
            config,
            game: Box::new(game),
            window: None,
            renderer: None,
            gui: None,
            textures: None,
            timing: FrameTiming::default(),
            last_frame: Instant::now(),
            failure: None,
        }
    }

    /// Blocks until the window closes. Startup failures (window, GPU, assets)
    /// and unrecoverable surface errors end the loop and come back as the error.
    pub fn run(mut self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            game = %self.game.name(),
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self)
            .context("event loop terminated abnormally")?;

        if let Some(err) = self.failure.take() {
            return Err(err);
        }

        tracing::info!(target: "engine", frames = self.timing.frame, "Engine shutdown complete");
        Ok(())
    }

    fn window_title(&self) -> String {
        format!("{} - {}", self.config.app_name, self.game.name())
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let prefs = self.game.window_descriptor();
        let width = prefs.width.unwrap_or(self.config.window_width) as f64;
        let height = prefs.height.unwrap_or(self.config.window_height) as f64;
        let title = prefs.title.clone().unwrap_or_else(|| self.window_title());

        let mut attributes = Window::default_attributes()
            .with_title(title)
            .with_resizable(prefs.resizable)
            .with_inner_size(LogicalSize::new(width, height));
        if prefs.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );
        let renderer = pollster::block_on(Renderer::new(window.clone()))
            .context("failed to initialize renderer")?;
        tracing::info!(target: "engine", "renderer initialized");

        let gui = Gui::new(&window, &renderer);
        let mut textures = TextureTable::new(gui.context().clone());
        self.game
            .load(&mut textures)
            .context("failed to load game assets")?;
        tracing::info!(target: "engine", textures = textures.texture_count(), "assets loaded");

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.gui = Some(gui);
        self.textures = Some(textures);
        self.last_frame = Instant::now();
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!(target: "engine", "{err:#}");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer), Some(gui), Some(textures)) = (
            self.window.as_ref(),
            self.renderer.as_mut(),
            self.gui.as_mut(),
            self.textures.as_ref(),
        ) else {
            return;
        };

        let now = Instant::now();
        self.timing.advance(now.duration_since(self.last_frame));
        self.last_frame = now;
        tracing::trace!(
            target: "engine",
            frame = self.timing.frame,
            frame_delta_ms = self.timing.delta_seconds * 1000.0,
            fps = self.timing.fps,
            "frame tick"
        );

        let logical = window.inner_size().to_logical::<f32>(window.scale_factor());
        let screen_size = Vec2::new(logical.width, logical.height);
        let game = &mut self.game;

        let result = gui.frame(window, renderer, |ctx| {
            let controls = ctx.input(Controls::from_egui);
            let mut canvas = EguiCanvas::new(ctx, textures);
            game.frame(&mut Frame {
                controls,
                screen_size,
                canvas: &mut canvas,
            });
        });

        match result {
            Ok(()) => {}
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                renderer.resize(window.inner_size());
            }
            Err(SurfaceError::Timeout) => {
                tracing::warn!(target: "engine", "surface timeout, retrying next frame");
            }
            Err(err) => {
                self.fail(event_loop, anyhow!(err).context("unrecoverable surface error"));
            }
        }
    }
}

impl ApplicationHandler for EngineApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.init(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(gui)) = (self.window.as_ref(), self.gui.as_mut()) {
            gui.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(target: "engine", "window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size);
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(renderer)) =
                    (self.window.as_ref(), self.renderer.as_mut())
                {
                    renderer.resize(window.inner_size());
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.is_minimized().unwrap_or(false) {
            event_loop.set_control_flow(ControlFlow::wait_duration(MINIMIZED_POLL));
        } else {
            event_loop.set_control_flow(ControlFlow::Poll);
            window.request_redraw();
        }
    }
}
