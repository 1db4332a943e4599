//! Handler für die Handle-Animation.

use crate::app::AppState;
use crate::core::HandleAnimator;

/// Schaltet die Animation ein oder aus.
///
/// Die Phase läuft über die App-Uhr weiter; beim Wiedereinschalten
/// springt der Steuerpunkt auf die aktuelle Phasenlage statt neu bei
/// null zu beginnen.
pub fn set_enabled(state: &mut AppState, enabled: bool) {
    state.animation.enabled = enabled;
    log::debug!("Animation {}", if enabled { "an" } else { "aus" });
}

/// Führt einen Animations-Tick aus und baut die Geometrie neu.
pub fn advance(state: &mut AppState, elapsed_seconds: f64) {
    let animator = HandleAnimator {
        amplitude: state.options.animation_amplitude,
        frequency: state.options.animation_frequency,
        lerp_factor: state.options.animation_lerp_factor,
        time_scale: state.options.animation_time_scale,
    };
    animator.apply(&mut state.curve, elapsed_seconds);
    super::curve_edit::rebuild_geometry(state);
}
