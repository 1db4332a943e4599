//! Renderer für das Strassenband (indiziertes Dreiecks-Gitter).

use super::types::{RenderContext, RibbonVertex};
use crate::shared::{grid_triangles, RibbonMesh};
use eframe::{egui_wgpu, wgpu};

/// Renderer für den Strassenkörper.
///
/// Das Band wird beidseitig gezeichnet (kein Culling) — die Kamera
/// darf unter die Strasse orbiten. Vertex- und Index-Buffer wachsen
/// nur bei Kapazitätsüberschreitung, der reine Inhalt wird per
/// `write_buffer` ersetzt.
pub struct RibbonRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    index_buffer: Option<wgpu::Buffer>,
    index_capacity: usize,
    index_count: u32,
    /// Wiederverwendbare Scratch-Buffer (vermeidet per-Upload-Allokation)
    vertex_scratch: Vec<RibbonVertex>,
    index_scratch: Vec<u32>,
}

impl RibbonRenderer {
    /// Erstellt einen neuen Ribbon-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Ribbon Uniform Buffer"),
            size: std::mem::size_of::<super::types::Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Ribbon Bind Group Layout"),
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
            label: Some("Ribbon Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Ribbon Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Ribbon Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_ribbon"),
                buffers: &[RibbonVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_ribbon"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: render_state.target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
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
            index_buffer: None,
            index_capacity: 0,
            index_count: 0,
            vertex_scratch: Vec::new(),
            index_scratch: Vec::new(),
        }
    }

    /// Lädt das Band-Mesh in die GPU-Buffer (nur bei dirty Geometrie).
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, mesh: &RibbonMesh) {
        self.vertex_scratch.clear();
        self.vertex_scratch.extend(
            mesh.positions
                .iter()
                .zip(&mesh.normals)
                .map(|(position, normal)| RibbonVertex {
                    position: position.to_array(),
                    normal: normal.to_array(),
                }),
        );

        self.index_scratch.clear();
        for triangle in grid_triangles(mesh.cross_sections()) {
            self.index_scratch.extend_from_slice(&triangle);
        }
        self.index_count = self.index_scratch.len() as u32;

        if self.vertex_scratch.is_empty() || self.index_scratch.is_empty() {
            self.index_count = 0;
            return;
        }

        if self.vertex_buffer.is_none() || self.vertex_scratch.len() > self.vertex_capacity {
            let size =
                (self.vertex_scratch.len() * std::mem::size_of::<RibbonVertex>()) as u64;
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Ribbon Vertex Buffer"),
                size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = self.vertex_scratch.len();
        }

        if self.index_buffer.is_none() || self.index_scratch.len() > self.index_capacity {
            let size = (self.index_scratch.len() * std::mem::size_of::<u32>()) as u64;
            self.index_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Ribbon Index Buffer"),
                size,
                usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.index_capacity = self.index_scratch.len();
        }

        if let Some(vertex_buffer) = &self.vertex_buffer {
            queue.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&self.vertex_scratch));
        }
        if let Some(index_buffer) = &self.index_buffer {
            queue.write_buffer(index_buffer, 0, bytemuck::cast_slice(&self.index_scratch));
        }
    }

    /// Zeichnet das Band mit den aktuellen Frame-Uniforms.
    pub fn render(&mut self, ctx: &RenderContext, render_pass: &mut wgpu::RenderPass<'static>) {
        if self.index_count == 0 {
            return;
        }
        let (Some(vertex_buffer), Some(index_buffer)) =
            (self.vertex_buffer.as_ref(), self.index_buffer.as_ref())
        else {
            return;
        };

        let uniforms = super::types::build_uniforms(ctx.camera, ctx.viewport_size);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
