//! Handler für den Optionen-Dialog.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Öffnet den Optionen-Dialog.
pub fn open_options(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog ohne Übernehmen.
pub fn close_options(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt Optionen aus dem Dialog, baut die Geometrie neu und
/// persistiert die Datei neben der Binary.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    super::curve_edit::rebuild_geometry(state);

    if let Err(e) = state.options.save_to_file(&EditorOptions::config_path()) {
        log::warn!("Optionen konnten nicht gespeichert werden: {}", e);
    }
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    state.options = EditorOptions::default();
    super::curve_edit::rebuild_geometry(state);
}
