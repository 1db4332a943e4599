//! Prozedurale Handle-Animation: Sinus-Flattern + Verfolgungs-Lerp.

use super::curve_state::CurveState;

/// Animations-Parameter und Update-Regel.
///
/// Pro Tick: `control.y = sin(time·frequency)·amplitude`, danach zieht
/// ein exponentieller Verfolgungs-Lerp `p2.y` mit `lerp_factor` pro
/// Tick in Richtung `control.y`.
///
/// Der Lerp ist bewusst pro-Tick-konstant und NICHT über die
/// Frame-Zeit normalisiert, dadurch frameratenabhängig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleAnimator {
    /// Auslenkung der Steuerpunkt-Oszillation
    pub amplitude: f32,
    /// Frequenz der Oszillation
    pub frequency: f32,
    /// Verfolgungs-Anteil pro Tick (0..1)
    pub lerp_factor: f32,
    /// Skalierung der Wanduhr-Sekunden auf Animationszeit
    pub time_scale: f64,
}

impl HandleAnimator {
    /// Standard-Parameter (Amplitude 7, Frequenz 1, Lerp 0.1,
    /// Zeitskala 3.0).
    pub fn new() -> Self {
        Self {
            amplitude: 7.0,
            frequency: 1.0,
            lerp_factor: 0.1,
            time_scale: 3.0,
        }
    }

    /// Führt einen Animations-Tick aus.
    ///
    /// `elapsed_seconds` ist Wanduhr-Zeit seit App-Start; die Phase
    /// steckt vollständig in der Uhr, kein persistierter Zustand.
    pub fn apply(&self, curve: &mut CurveState, elapsed_seconds: f64) {
        let time = elapsed_seconds * self.time_scale;
        curve.control.y = ((time * self.frequency as f64).sin() as f32) * self.amplitude;
        curve.p2.y += (curve.control.y - curve.p2.y) * self.lerp_factor;
    }
}

impl Default for HandleAnimator {
    fn default() -> Self {
        Self::new()
    }
}
