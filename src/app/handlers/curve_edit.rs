//! Handler für Kontrollpunkt-Editierung und Strassen-Parameter.
//!
//! Jede Kurven-Mutation baut die abgeleitete Geometrie im selben Tick
//! neu auf; der Renderer sieht nie einen halb aktualisierten Zustand.

use crate::app::AppState;
use crate::core::{ControlPointId, CurveState};
use crate::shared::options::{ROAD_SEGMENTS_MAX, ROAD_SEGMENTS_MIN};
use glam::Vec3;

/// Baut Band, Mittellinie und Handle-Linien aus dem aktuellen
/// Kurven-Zustand neu und markiert die Geometrie als dirty.
pub fn rebuild_geometry(state: &mut AppState) {
    state
        .geometry
        .rebuild(&state.curve, state.options.road_width, state.options.segments());
}

/// Setzt einen Kontrollpunkt (geklemmt auf den Panel-Bereich).
pub fn set_control_point(state: &mut AppState, id: ControlPointId, position: Vec3) {
    let clamped = CurveState::clamp_to_panel_range(position);
    state.curve.set_position(id, clamped);
    rebuild_geometry(state);
}

/// Setzt die Kurve auf die Ausgangs-Kontrollpunkte zurück.
pub fn reset_curve(state: &mut AppState) {
    state.curve = CurveState::new();
    rebuild_geometry(state);
    log::debug!("Kurve zurückgesetzt");
}

/// Setzt die Band-Breite.
pub fn set_road_width(state: &mut AppState, width: f32) {
    state.options.road_width = width.max(0.0);
    rebuild_geometry(state);
}

/// Setzt die Segmentzahl (geklemmt auf den gültigen Bereich).
pub fn set_road_segments(state: &mut AppState, segments: u32) {
    state.options.road_segments = segments.clamp(ROAD_SEGMENTS_MIN, ROAD_SEGMENTS_MAX);
    rebuild_geometry(state);
}
