//! Handler für den Drag-Lifecycle der Kontrollpunkt-Handles.

use crate::app::state::DragMode;
use crate::app::AppState;
use crate::core::{pick_handle, ray_drag_plane_intersection, CurveState};
use glam::Vec2;

/// Drag-Start: pickt den Handle unter dem Cursor.
/// Ohne Treffer beginnt stattdessen ein Kamera-Orbit.
pub fn begin(state: &mut AppState, ndc: Vec2) {
    let ray = state.view.camera.screen_to_ray(ndc, state.view.viewport_size);
    match pick_handle(&ray, &state.curve, state.options.handle_radius_world) {
        Some(id) => {
            log::debug!("Drag-Start: {}", id.label());
            state.drag.mode = DragMode::Handle(id);
            state.drag.hovered = Some(id);
        }
        None => {
            state.drag.mode = DragMode::Orbit;
            state.drag.hovered = None;
        }
    }
}

/// Drag-Update: projiziert den Cursor auf die Drag-Ebene und zieht den
/// Handle dorthin. Verfehlt der Strahl die Ebene, bleibt der Punkt
/// für diesen Frame stehen.
pub fn update(state: &mut AppState, ndc: Vec2) {
    let DragMode::Handle(id) = state.drag.mode else {
        return;
    };

    let ray = state.view.camera.screen_to_ray(ndc, state.view.viewport_size);
    if let Some(hit) = ray_drag_plane_intersection(&ray) {
        let clamped = CurveState::clamp_to_panel_range(hit);
        state.curve.set_position(id, clamped);
        super::curve_edit::rebuild_geometry(state);
    }
}

/// Drag-Ende: zurück in den Ruhezustand.
pub fn end(state: &mut AppState) {
    state.drag.mode = DragMode::Idle;
}

/// Aktualisiert den Hover-Zustand (nur im Ruhezustand aufgerufen).
pub fn hover(state: &mut AppState, ndc: Vec2) {
    let ray = state.view.camera.screen_to_ray(ndc, state.view.viewport_size);
    state.drag.hovered = pick_handle(&ray, &state.curve, state.options.handle_radius_world);
}
