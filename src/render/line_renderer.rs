//! Renderer für die Linien-Overlays (Mittellinie + Handle-Linien).

use super::types::{LineVertex, RenderContext};
use crate::shared::{EditorOptions, RoadGeometry};
use eframe::{egui_wgpu, wgpu};

/// Renderer für Linien-Segmente (LineList).
///
/// Mittellinie und Handle-Linien landen in einem gemeinsamen
/// Vertex-Buffer; die Farbe steckt pro Vertex im Buffer, damit ein
/// Draw-Call für beide Overlays reicht.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    vertex_count: u32,
    vertex_scratch: Vec<LineVertex>,
}

impl LineRenderer {
    /// Erstellt einen neuen Line-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Uniform Buffer"),
            size: std::mem::size_of::<super::types::Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Line Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Line Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_line"),
                buffers: &[LineVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 4,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_count: 0,
            vertex_scratch: Vec::new(),
        }
    }

    /// Lädt Mittellinie und Handle-Linien in den GPU-Buffer.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        geometry: &RoadGeometry,
        options: &EditorOptions,
    ) {
        self.vertex_scratch.clear();

        // Mittellinie als Segmentkette
        for pair in geometry.centerline.windows(2) {
            self.vertex_scratch
                .push(LineVertex::new(pair[0], options.centerline_color));
            self.vertex_scratch
                .push(LineVertex::new(pair[1], options.centerline_color));
        }

        // Handle-Linien p0→Steuerpunkt→p2
        for segment in &geometry.handle_segments {
            self.vertex_scratch
                .push(LineVertex::new(segment[0], options.handle_line_color));
            self.vertex_scratch
                .push(LineVertex::new(segment[1], options.handle_line_color));
        }

        self.vertex_count = self.vertex_scratch.len() as u32;
        if self.vertex_scratch.is_empty() {
            return;
        }

        if self.vertex_buffer.is_none() || self.vertex_scratch.len() > self.vertex_capacity {
            let size = (self.vertex_scratch.len() * std::mem::size_of::<LineVertex>()) as u64;
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Line Vertex Buffer"),
                size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = self.vertex_scratch.len();
        }

        if let Some(vertex_buffer) = &self.vertex_buffer {
            queue.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&self.vertex_scratch));
        }
    }

    /// Zeichnet alle Linien-Segmente.
    pub fn render(&mut self, ctx: &RenderContext, render_pass: &mut wgpu::RenderPass<'static>) {
        if self.vertex_count == 0 {
            return;
        }
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            return;
        };

        let uniforms = super::types::build_uniforms(ctx.camera, ctx.viewport_size);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
