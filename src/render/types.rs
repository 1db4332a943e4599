//! Rendering-Typen und Konfiguration.

use crate::core::OrbitCamera;
use crate::shared::EditorOptions;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter, die jeder
/// Sub-Renderer bei jedem Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Orbit-Kamera des Frames
    pub camera: &'a OrbitCamera,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    /// Editor-Optionen (Farben, Größen, etc.)
    pub options: &'a EditorOptions,
}

/// Vertex des Strassenbands (Position + gemittelte Normale)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RibbonVertex {
    /// Position in Weltkoordinaten
    pub position: [f32; 3],
    /// Vertex-Normale
    pub normal: [f32; 3],
}

impl RibbonVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<RibbonVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Vertex der Linien-Overlays (Mittellinie + Handle-Linien).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in Weltkoordinaten
    pub position: [f32; 3],
    /// RGBA-Farbe der Linie
    pub color: [f32; 4],
}

impl LineVertex {
    /// Erstellt einen neuen LineVertex.
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Vertex für ein Billboard-Quad (2D-Eckpunkt)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Eckpunkt im Quad-Raum [-1, 1]²
    pub corner: [f32; 2],
}

impl QuadVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Kontrollpunkt-Handle (Billboard-Scheibe)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct HandleInstance {
    /// Position in Weltkoordinaten
    pub position: [f32; 3],
    /// Marker-Radius in Welteinheiten
    pub size: f32,
    /// RGBA-Farbe des Markers
    pub color: [f32; 4],
}

impl HandleInstance {
    /// Erstellt eine neue Handle-Instanz.
    pub fn new(position: Vec3, color: [f32; 4], size: f32) -> Self {
        Self {
            position: position.to_array(),
            size,
            color,
        }
    }

    /// Beschreibt das Instanz-Layout für wgpu (HandleInstance).
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<HandleInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as eframe::wgpu::BufferAddress,
                    shader_location: 3,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Buffer für View-Projektion und Billboard-Achsen
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// Kamera-Rechts-Achse in Weltkoordinaten (xyz, w ungenutzt)
    pub camera_right: [f32; 4],
    /// Kamera-Hoch-Achse in Weltkoordinaten (xyz, w ungenutzt)
    pub camera_up: [f32; 4],
}

/// Berechnet die Frame-Uniforms aus Kamera und Viewport.
///
/// Die Billboard-Achsen spannen Handle-Quads immer parallel zur
/// Bildebene auf.
pub(crate) fn build_uniforms(camera: &OrbitCamera, viewport_size: [f32; 2]) -> Uniforms {
    let forward = (camera.target - camera.eye()).normalize_or(Vec3::NEG_Z);
    let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
    let up = right.cross(forward);

    Uniforms {
        view_proj: camera.view_projection(viewport_size).to_cols_array_2d(),
        camera_right: right.extend(0.0).to_array(),
        camera_up: up.extend(0.0).to_array(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_billboard_axes_are_orthonormal() {
        let camera = OrbitCamera::new();
        let uniforms = build_uniforms(&camera, [1280.0, 720.0]);
        let right = Vec3::from_slice(&uniforms.camera_right[..3]);
        let up = Vec3::from_slice(&uniforms.camera_up[..3]);

        assert_relative_eq!(right.length(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(up.length(), 1.0, epsilon = 1e-4);
        assert_relative_eq!(right.dot(up), 0.0, epsilon = 1e-4);
    }
}
