//! Kontrollpunkt-Zustand der editierbaren Kurve.
//!
//! Die drei Punkte sind der einzige mutierende Zustand der Pipeline.
//! Sie gehören dem `AppState` — keine ambienten Globals; Drag-, Panel-
//! und Animations-Handler mutieren sie pro Tick exklusiv.

use super::curve::QuadraticBezier;
use glam::Vec3;

/// Untere Koordinaten-Grenze für das Parameter-Panel (pro Achse).
pub const COORD_MIN: f32 = -20.0;
/// Obere Koordinaten-Grenze für das Parameter-Panel.
pub const COORD_MAX: f32 = 20.0;

/// Start-Position p0.
pub const DEFAULT_P0: Vec3 = Vec3::new(-10.0, 0.0, 0.0);
/// Start-Position des Steuerpunkts.
pub const DEFAULT_CONTROL: Vec3 = Vec3::new(3.0, 15.0, 0.0);
/// Start-Position p2.
pub const DEFAULT_P2: Vec3 = Vec3::new(10.0, 0.0, 0.0);

/// Stabile Kennung eines Kontrollpunkt-Handles.
///
/// Ersetzt Reverse-Lookups über Display-Objekte: Pick-Ergebnisse werden
/// direkt auf diese Kennung abgebildet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPointId {
    /// Startpunkt der Kurve
    P0,
    /// Steuerpunkt (Handle)
    Control,
    /// Endpunkt der Kurve
    P2,
}

impl ControlPointId {
    /// Alle Kennungen in Pick-Reihenfolge.
    pub const ALL: [ControlPointId; 3] = [
        ControlPointId::P0,
        ControlPointId::Control,
        ControlPointId::P2,
    ];

    /// Anzeigename für Panel und Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            ControlPointId::P0 => "Punkt 0",
            ControlPointId::Control => "Steuerpunkt",
            ControlPointId::P2 => "Punkt 2",
        }
    }
}

/// Die drei Kontrollpunkte der quadratischen Bézier-Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveState {
    /// Startpunkt
    pub p0: Vec3,
    /// Steuerpunkt
    pub control: Vec3,
    /// Endpunkt
    pub p2: Vec3,
}

impl CurveState {
    /// Erstellt den Ausgangs-Zustand der Demo-Kurve.
    pub fn new() -> Self {
        Self {
            p0: DEFAULT_P0,
            control: DEFAULT_CONTROL,
            p2: DEFAULT_P2,
        }
    }

    /// Liest die Position eines Kontrollpunkts.
    pub fn position(&self, id: ControlPointId) -> Vec3 {
        match id {
            ControlPointId::P0 => self.p0,
            ControlPointId::Control => self.control,
            ControlPointId::P2 => self.p2,
        }
    }

    /// Setzt die Position eines Kontrollpunkts.
    pub fn set_position(&mut self, id: ControlPointId, position: Vec3) {
        match id {
            ControlPointId::P0 => self.p0 = position,
            ControlPointId::Control => self.control = position,
            ControlPointId::P2 => self.p2 = position,
        }
    }

    /// Klemmt eine Position auf den Panel-Wertebereich [−20, 20].
    pub fn clamp_to_panel_range(position: Vec3) -> Vec3 {
        position.clamp(Vec3::splat(COORD_MIN), Vec3::splat(COORD_MAX))
    }

    /// Momentaufnahme als Kurven-Evaluator (pro Rebuild neu erzeugt).
    pub fn curve(&self) -> QuadraticBezier {
        QuadraticBezier::new(self.p0, self.control, self.p2)
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_roundtrip_per_id() {
        let mut state = CurveState::new();
        for (i, id) in ControlPointId::ALL.into_iter().enumerate() {
            let p = Vec3::splat(i as f32 + 1.0);
            state.set_position(id, p);
            assert_eq!(state.position(id), p);
        }
    }

    #[test]
    fn test_clamp_to_panel_range() {
        let clamped = CurveState::clamp_to_panel_range(Vec3::new(-30.0, 5.0, 99.0));
        assert_eq!(clamped, Vec3::new(-20.0, 5.0, 20.0));
    }

    #[test]
    fn test_curve_snapshot_uses_current_points() {
        let mut state = CurveState::new();
        state.control = Vec3::new(0.0, 7.0, 0.0);
        let curve = state.curve();
        assert_eq!(curve.p1, Vec3::new(0.0, 7.0, 0.0));
        assert_eq!(curve.p0, state.p0);
        assert_eq!(curve.p2, state.p2);
    }
}
