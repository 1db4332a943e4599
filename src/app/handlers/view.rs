//! Handler für Kamera, Viewport und App-Lifecycle.

use crate::app::AppState;
use crate::core::OrbitCamera;
use glam::Vec2;

/// Setzt das Beenden-Flag; der Runner schließt das Fenster im
/// nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Orbitiert die Kamera um den Zielpunkt.
pub fn orbit(state: &mut AppState, delta: Vec2) {
    // Maus nach rechts/oben dreht die Szene mit
    state.view.camera.orbit(-delta.x, delta.y);
}

/// Ändert den Kamera-Abstand (Dolly).
pub fn dolly(state: &mut AppState, factor: f32) {
    state.view.camera.dolly(factor);
}

/// Setzt die Kamera auf die Ausgangspose zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = OrbitCamera::new();
}
