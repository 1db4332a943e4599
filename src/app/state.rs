//! Zentraler Anwendungszustand.

use super::command_log::CommandLog;
use crate::core::{ControlPointId, CurveState, OrbitCamera};
use crate::shared::{EditorOptions, RoadGeometry};
use std::time::Instant;

/// Kamera- und Viewport-Zustand.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Orbit-Kamera des 3D-Viewports
    pub camera: OrbitCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl ViewState {
    fn new() -> Self {
        Self {
            camera: OrbitCamera::new(),
            viewport_size: [1280.0, 720.0],
        }
    }
}

/// Aktueller Drag-Modus des Viewports.
///
/// Ein Druck der primären Taste pickt zuerst die Handles; ohne Treffer
/// fällt der Drag auf Kamera-Orbit zurück. Während eines Handle-Drags
/// ist die Kamera eingefroren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Kontrollpunkt wird auf der Drag-Ebene gezogen
    Handle(ControlPointId),
    /// Kamera-Orbit
    Orbit,
}

/// Drag- und Hover-Zustand der Kontrollpunkt-Handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Aktiver Drag-Modus
    pub mode: DragMode,
    /// Handle unter dem Cursor (für Hervorhebung)
    pub hovered: Option<ControlPointId>,
}

impl DragState {
    /// Der aktuell gezogene Kontrollpunkt, falls vorhanden.
    pub fn dragged_handle(&self) -> Option<ControlPointId> {
        match self.mode {
            DragMode::Handle(id) => Some(id),
            _ => None,
        }
    }
}

/// Zustand der Handle-Animation.
///
/// `epoch` ist die Wanduhr-Referenz für die Animationsphase; sie läuft
/// ab App-Start durch und wird beim Umschalten nicht zurückgesetzt,
/// damit die Phase beim Wiedereinschalten nahtlos weiterläuft.
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Ob die Animation pro Frame tickt
    pub enabled: bool,
    /// Referenzzeitpunkt für `elapsed_seconds`
    pub epoch: Instant,
}

impl AnimationState {
    fn new() -> Self {
        Self {
            enabled: false,
            epoch: Instant::now(),
        }
    }

    /// Sekunden seit dem Referenzzeitpunkt.
    pub fn elapsed_seconds(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// Gesamter mutierbarer Anwendungszustand.
pub struct AppState {
    /// Die drei Kontrollpunkte der Kurve
    pub curve: CurveState,
    /// Abgeleitete Strassen-Geometrie (Band, Mittellinie, Handle-Linien)
    pub geometry: RoadGeometry,
    /// Kamera und Viewport
    pub view: ViewState,
    /// Drag/Hover der Handles
    pub drag: DragState,
    /// Handle-Animation
    pub animation: AnimationState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Optionen-Dialog sichtbar
    pub show_options_dialog: bool,
    /// Beenden angefordert
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Ausgangszustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt den Ausgangszustand mit geladenen Optionen.
    /// Die Geometrie ist sofort gültig (erster Rebuild inklusive).
    pub fn with_options(options: EditorOptions) -> Self {
        let curve = CurveState::new();
        let mut geometry = RoadGeometry::new();
        geometry.rebuild(&curve, options.road_width, options.segments());

        Self {
            curve,
            geometry,
            view: ViewState::new(),
            drag: DragState::default(),
            animation: AnimationState::new(),
            options,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_valid_geometry() {
        let state = AppState::new();
        assert_eq!(state.geometry.ribbon.vertex_count(), 202);
        assert!(state.geometry.is_dirty(), "Erster Frame muss hochladen");
        assert!(!state.should_exit);
        assert_eq!(state.drag.mode, DragMode::Idle);
    }

    #[test]
    fn test_dragged_handle_accessor() {
        let mut drag = DragState::default();
        assert_eq!(drag.dragged_handle(), None);
        drag.mode = DragMode::Handle(ControlPointId::Control);
        assert_eq!(drag.dragged_handle(), Some(ControlPointId::Control));
        drag.mode = DragMode::Orbit;
        assert_eq!(drag.dragged_handle(), None);
    }
}
