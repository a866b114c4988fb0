use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiState;
use glam::Vec2;
use wgpu::SurfaceError;
use winit::{event::WindowEvent, window::Window};

use super::draw::{Canvas, Color, Layer, Rect, Stroke};
use super::renderer::Renderer;
use super::resources::{TextureId, TextureTable};

/// egui context plus its winit input bridge and wgpu painter.
pub struct Gui {
    ctx: egui::Context,
    state: EguiState,
    renderer: EguiRenderer,
}

impl Gui {
    pub fn new(window: &Window, renderer: &Renderer) -> Self {
        let ctx = egui::Context::default();
        let state = EguiState::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );
        let egui_renderer = EguiRenderer::new(
            renderer.device(),
            renderer.format(),
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            ctx,
            state,
            renderer: egui_renderer,
        }
    }

    pub fn context(&self) -> &egui::Context {
        &self.ctx
    }

    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) {
        let _ = self.state.on_window_event(window, event);
    }

    /// Runs one immediate-mode pass and presents the result.
    pub fn frame(
        &mut self,
        window: &Window,
        renderer: &mut Renderer,
        run_ui: impl FnMut(&egui::Context),
    ) -> Result<(), SurfaceError> {
        let raw_input = self.state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, run_ui);

        self.state
            .handle_platform_output(window, full_output.platform_output);
        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let size = renderer.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        renderer.render(
            &mut self.renderer,
            &paint_jobs,
            &full_output.textures_delta,
            &screen_descriptor,
        )
    }
}

/// [`Canvas`] backed by egui layer painters: the background layer sits under
/// every window, the foreground layer above.
pub struct EguiCanvas<'a> {
    background: egui::Painter,
    foreground: egui::Painter,
    textures: &'a TextureTable,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(ctx: &egui::Context, textures: &'a TextureTable) -> Self {
        Self {
            background: ctx.layer_painter(egui::LayerId::background()),
            foreground: ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("canova-overlay"),
            )),
            textures,
        }
    }

    fn painter(&self, layer: Layer) -> &egui::Painter {
        match layer {
            Layer::Background => &self.background,
            Layer::Foreground => &self.foreground,
        }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn image(&mut self, layer: Layer, texture: TextureId, rect: Rect) {
        let Some(id) = self.textures.egui_id(texture) else {
            tracing::warn!(target: "engine", ?texture, "draw with unknown texture skipped");
            return;
        };
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        self.painter(layer).image(
            id,
            egui::Rect::from_min_max(to_pos2(rect.min), to_pos2(rect.max)),
            uv,
            egui::Color32::WHITE,
        );
    }

    fn line(&mut self, layer: Layer, from: Vec2, to: Vec2, stroke: Stroke) {
        self.painter(layer).line_segment(
            [to_pos2(from), to_pos2(to)],
            egui::Stroke::new(stroke.width, to_color32(stroke.color)),
        );
    }
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn to_color32(color: Color) -> egui::Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    )
}
