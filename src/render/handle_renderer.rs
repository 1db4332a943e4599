//! Handle-Renderer mit GPU-Instancing (Billboard-Scheiben).

use super::types::{HandleInstance, QuadVertex, RenderContext};
use crate::shared::HandleVisual;
use eframe::{egui_wgpu, wgpu};
use wgpu::util::DeviceExt;

/// Anzahl der Handle-Instanzen (die drei Kontrollpunkte).
const HANDLE_COUNT: usize = 3;

/// Renderer für die Kontrollpunkt-Marker.
///
/// Drei instanzierte Billboard-Quads pro Frame; der Instance-Buffer
/// hat feste Kapazität und wird jeden Frame neu beschrieben, da sich
/// Positionen und Hervorhebung laufend ändern.
pub struct HandleRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
}

impl HandleRenderer {
    /// Erstellt einen neuen Handle-Renderer
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Handle Uniform Buffer"),
            size: std::mem::size_of::<super::types::Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Handle Bind Group Layout"),
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
            label: Some("Handle Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Handle Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Handle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_handle"),
                buffers: &[QuadVertex::desc(), HandleInstance::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_handle"),
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
                alpha_to_coverage_enabled: true,
            },
            multiview: None,
            cache: None,
        });

        // Vertex-Buffer für Quad (2 Dreiecke)
        let vertices = [
            QuadVertex {
                corner: [-1.0, -1.0],
            },
            QuadVertex { corner: [1.0, -1.0] },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex {
                corner: [-1.0, -1.0],
            },
            QuadVertex { corner: [1.0, 1.0] },
            QuadVertex { corner: [-1.0, 1.0] },
        ];

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Handle Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Handle Instance Buffer"),
            size: (HANDLE_COUNT * std::mem::size_of::<HandleInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            vertex_buffer,
            instance_buffer,
        }
    }

    /// Zeichnet die drei Kontrollpunkt-Marker.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        handles: &[HandleVisual; HANDLE_COUNT],
    ) {
        let instances: [HandleInstance; HANDLE_COUNT] = handles.map(|handle| {
            let color = if handle.active {
                ctx.options.handle_color_active
            } else {
                ctx.options.handle_color
            };
            let size = if handle.active || handle.hovered {
                ctx.options.handle_radius_world * ctx.options.handle_hover_size_factor
            } else {
                ctx.options.handle_radius_world
            };
            HandleInstance::new(handle.position, color, size)
        });

        let uniforms = super::types::build_uniforms(ctx.camera, ctx.viewport_size);
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        ctx.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw(0..6, 0..HANDLE_COUNT as u32);
    }
}
