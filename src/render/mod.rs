//! GPU-Rendering mit wgpu.

mod callback;
mod handle_renderer;
mod line_renderer;
mod ribbon_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use handle_renderer::HandleRenderer;
pub(crate) use line_renderer::LineRenderer;
pub(crate) use ribbon_renderer::RibbonRenderer;
use types::RenderContext;

use crate::shared::{EditorOptions, RoadGeometry};
use eframe::{egui_wgpu, wgpu};

/// Haupt-Renderer für die Strassen-Szene.
///
/// Dieser Renderer verwaltet seinen eigenen Zustand (GPU-Buffer, Pipelines)
/// und bietet eine saubere API: `new()` + `upload_geometry()` + `render_scene()`.
pub struct Renderer {
    ribbon_renderer: RibbonRenderer,
    line_renderer: LineRenderer,
    handle_renderer: HandleRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        // Shader einmalig laden — alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Road Studio Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        let ribbon_renderer = RibbonRenderer::new(render_state, &shader);
        let line_renderer = LineRenderer::new(render_state, &shader);
        let handle_renderer = HandleRenderer::new(render_state, &shader);

        Self {
            ribbon_renderer,
            line_renderer,
            handle_renderer,
        }
    }

    /// Lädt die abgeleitete Geometrie in die GPU-Buffer.
    ///
    /// Wird nur aufgerufen, wenn `RoadGeometry::take_dirty()` wahr war —
    /// unveränderte Frames kommen ohne Upload aus.
    pub fn upload_geometry(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        geometry: &RoadGeometry,
        options: &EditorOptions,
    ) {
        self.ribbon_renderer.upload(device, queue, &geometry.ribbon);
        self.line_renderer.upload(device, queue, geometry, options);
    }

    /// Rendert die komplette Szene
    ///
    /// Diese Methode nimmt nur Referenzen - keine Daten werden kopiert!
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        // Gemeinsamer Kontext für alle Sub-Renderer
        let ctx = RenderContext {
            device,
            queue,
            camera: &scene.camera,
            viewport_size: scene.viewport_size,
            options: &scene.options,
        };

        // 1. Strassenband
        self.ribbon_renderer.render(&ctx, render_pass);

        // 2. Linien-Overlays darüber
        self.line_renderer.render(&ctx, render_pass);

        // 3. Handles zuoberst
        self.handle_renderer
            .render(&ctx, render_pass, &scene.handles);
    }
}
