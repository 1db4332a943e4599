//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::OrbitCamera;
use glam::Vec3;

/// Darstellungs-Zustand eines Kontrollpunkt-Handles für einen Frame.
#[derive(Debug, Clone, Copy)]
pub struct HandleVisual {
    /// Welt-Position des Markers
    pub position: Vec3,
    /// Handle wird gerade gezogen
    pub active: bool,
    /// Handle liegt unter dem Cursor
    pub hovered: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: OrbitCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Die drei Kontrollpunkt-Marker in Kurven-Reihenfolge
    pub handles: [HandleVisual; 3],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}
