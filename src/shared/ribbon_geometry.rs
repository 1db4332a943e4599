//! Reine Geometrie-Funktionen für das Strassenband entlang der Kurve.
//!
//! Layer-neutral: `app` baut die Geometrie, `render` lädt sie hoch.
//! Alle Builder arbeiten in-place auf wiederverwendeten Buffern —
//! ein Rebuild pro Drag-Frame oder Animations-Tick darf den Speicher
//! nicht unbegrenzt wachsen lassen.

use crate::core::{CurveState, QuadraticBezier};
use glam::Vec3;

/// Normalen-Fallback für entartete Dreiecke.
const DEGENERATE_NORMAL: Vec3 = Vec3::Y;

/// Dreiecks-Indizes des Zwei-Spalten-Gitters.
///
/// Zeile i besitzt die Vertices (2i, 2i+1) in der Reihenfolge
/// links, rechts; jedes Quad zwischen zwei Zeilen zerfällt in zwei
/// Dreiecke. Renderer und Normalen-Berechnung teilen sich diese
/// Triangulierung, damit Winding und Shading konsistent bleiben.
pub fn grid_triangles(cross_sections: usize) -> impl Iterator<Item = [u32; 3]> {
    (0..cross_sections.saturating_sub(1)).flat_map(|row| {
        let base = (2 * row) as u32;
        [
            [base, base + 1, base + 2],
            [base + 2, base + 1, base + 3],
        ]
    })
}

/// Band-Mesh: pro Querschnitt genau zwei Kanten-Vertices.
///
/// `positions` hat immer die Länge 2·(segments+1); `normals` ist
/// parallel dazu. Die Buffer werden bei jedem Rebuild geleert und neu
/// befüllt, nie über Rebuilds hinweg in-place mutiert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RibbonMesh {
    /// Kanten-Vertices, abwechselnd links/rechts pro Querschnitt
    pub positions: Vec<Vec3>,
    /// Gemittelte Vertex-Normalen über die Gitter-Triangulierung
    pub normals: Vec<Vec3>,
}

impl RibbonMesh {
    /// Erstellt ein leeres Mesh (erster Rebuild befüllt es).
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der Querschnitte (Zeilen des Gitters).
    pub fn cross_sections(&self) -> usize {
        self.positions.len() / 2
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Baut das Band neu auf.
    ///
    /// Für i in 0..=segments: t = i/segments, Querschnitt am
    /// Kurvenpunkt. Der Gier-Winkel `atan2(tangent.x, tangent.z)`
    /// ignoriert bewusst die Vertikal-Komponente der Tangente — der
    /// Querschnitt bleibt auch bei steiler Kurve horizontal, das Band
    /// verdreht sich nicht aus der Ebene. Beide Kanten-Vertices teilen
    /// das y des Kurvenpunkts (kein Banking).
    pub fn rebuild(&mut self, curve: &QuadraticBezier, width: f32, segments: usize) {
        let segments = segments.max(1);
        self.positions.clear();
        self.positions.reserve(2 * (segments + 1));

        let half_width = width / 2.0;
        for i in 0..=segments {
            let t = i as f32 / segments as f32;
            let point = curve.point_at(t);
            let tangent = curve.tangent_at(t);

            let angle = tangent.x.atan2(tangent.z);
            let offset = Vec3::new(half_width * angle.cos(), 0.0, -half_width * angle.sin());

            self.positions.push(point + offset);
            self.positions.push(point - offset);
        }

        self.recompute_normals();
    }

    /// Mittelt Vertex-Normalen über die angrenzenden Dreiecksflächen
    /// (flächengewichtet über das Kreuzprodukt, dann normiert).
    fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), Vec3::ZERO);

        for [a, b, c] in grid_triangles(self.cross_sections()) {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }

        for normal in &mut self.normals {
            *normal = normal.try_normalize().unwrap_or(DEGENERATE_NORMAL);
        }
    }
}

/// Tastet die Mittellinie der Kurve gleichmäßig ab (segments+1 Punkte).
pub fn sample_centerline(curve: &QuadraticBezier, segments: usize, out: &mut Vec<Vec3>) {
    let segments = segments.max(1);
    out.clear();
    out.reserve(segments + 1);
    for i in 0..=segments {
        out.push(curve.point_at(i as f32 / segments as f32));
    }
}

/// Die beiden Handle-Strecken p0→Steuerpunkt und Steuerpunkt→p2.
pub fn handle_segments(curve: &CurveState) -> [[Vec3; 2]; 2] {
    [
        [curve.p0, curve.control],
        [curve.control, curve.p2],
    ]
}

/// Abgeleitete Strassen-Geometrie mit Arena-Slots.
///
/// Ein Slot pro visuellem Element; `rebuild` ersetzt die Inhalte
/// atomar und markiert die Geometrie genau einmal als dirty. Der
/// Renderer konsumiert das Flag und lädt erst dann GPU-Buffer neu.
#[derive(Debug, Clone, Default)]
pub struct RoadGeometry {
    /// Band-Mesh des Strassenkörpers
    pub ribbon: RibbonMesh,
    /// Mittellinien-Overlay
    pub centerline: Vec<Vec3>,
    /// Handle-Linien-Overlay
    pub handle_segments: [[Vec3; 2]; 2],
    dirty: bool,
}

impl RoadGeometry {
    /// Erstellt leere Geometrie-Slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut alle abgeleiteten Elemente aus dem aktuellen
    /// Kontrollpunkt-Zustand neu (synchron, innerhalb eines Ticks).
    pub fn rebuild(&mut self, curve_state: &CurveState, width: f32, segments: usize) {
        let curve = curve_state.curve();
        self.ribbon.rebuild(&curve, width, segments);
        sample_centerline(&curve, segments, &mut self.centerline);
        self.handle_segments = handle_segments(curve_state);
        self.dirty = true;
    }

    /// Ob seit dem letzten Upload neu gebaut wurde.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Konsumiert das Dirty-Flag (einmal pro Upload).
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
