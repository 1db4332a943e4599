//! Quadratische Bézier-Kurve im 3D-Raum.
//!
//! Reiner Kurven-Evaluator: wird pro Rebuild aus den aktuellen
//! Kontrollpunkten konstruiert, kein Caching über Edits hinweg.

use glam::Vec3;

/// Richtungs-Fallback, wenn Ableitung und Sehne beide degeneriert sind.
const FALLBACK_TANGENT: Vec3 = Vec3::Z;

/// Quadratische Bézier-Kurve aus drei Kontrollpunkten.
///
/// `p0` und `p2` sind die Endpunkte, `p1` der Steuerpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Startpunkt (t = 0)
    pub p0: Vec3,
    /// Steuerpunkt
    pub p1: Vec3,
    /// Endpunkt (t = 1)
    pub p2: Vec3,
}

impl QuadraticBezier {
    /// Erstellt die Kurve aus den drei Kontrollpunkten.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        Self { p0, p1, p2 }
    }

    /// Punkt auf der Kurve: B(t) = (1−t)²·p0 + 2(1−t)t·p1 + t²·p2.
    pub fn point_at(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        u * u * self.p0 + 2.0 * u * t * self.p1 + t * t * self.p2
    }

    /// Normierte Tangente: B′(t) = 2(1−t)·(p1−p0) + 2t·(p2−p1).
    ///
    /// Degenerierte Kurven (kollineare/zusammenfallende Kontrollpunkte
    /// mit Auslöschung bei diesem t) liefern nie NaN: Fallback ist die
    /// normierte Sehne p2−p0, danach eine feste +Z-Richtung.
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        let derivative = 2.0 * u * (self.p1 - self.p0) + 2.0 * t * (self.p2 - self.p1);

        derivative
            .try_normalize()
            .or_else(|| (self.p2 - self.p0).try_normalize())
            .unwrap_or(FALLBACK_TANGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_exact() {
        let curve = QuadraticBezier::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        );
        // Endpunkt-Interpolation muss bitgenau sein, nicht nur "nah dran"
        assert_eq!(curve.point_at(0.0), curve.p0);
        assert_eq!(curve.point_at(1.0), curve.p2);
    }

    #[test]
    fn test_midpoint_formula() {
        // B(0.5) = 0.25·p0 + 0.5·p1 + 0.25·p2
        let curve = QuadraticBezier::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        );
        let mid = curve.point_at(0.5);
        assert_relative_eq!(mid.x, 0.0);
        assert_relative_eq!(mid.y, 7.5);
        assert_relative_eq!(mid.z, 0.0);
    }

    #[test]
    fn test_points_stay_in_control_plane() {
        // Quadratische Bézier ist planar: alle Samples liegen in der
        // Ebene der drei Kontrollpunkte
        let p0 = Vec3::new(1.0, 2.0, 3.0);
        let p1 = Vec3::new(-4.0, 7.0, 1.0);
        let p2 = Vec3::new(6.0, -2.0, 5.0);
        let curve = QuadraticBezier::new(p0, p1, p2);

        let normal = (p1 - p0).cross(p2 - p0).normalize();
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            let offset = curve.point_at(t) - p0;
            assert_relative_eq!(normal.dot(offset), 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_tangent_is_unit_length() {
        let curve = QuadraticBezier::new(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        );
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_relative_eq!(curve.tangent_at(t).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_degenerate_curve_falls_back_without_nan() {
        // Alle drei Punkte identisch: Ableitung und Sehne sind null
        let p = Vec3::new(2.0, 3.0, 4.0);
        let curve = QuadraticBezier::new(p, p, p);

        for i in 0..=4 {
            let t = i as f32 / 4.0;
            assert_eq!(curve.point_at(t), p);
            let tangent = curve.tangent_at(t);
            assert!(tangent.is_finite());
            assert_eq!(tangent, Vec3::Z);
        }
    }

    #[test]
    fn test_collinear_cancellation_uses_chord() {
        // p1 == p0 erzeugt Auslöschung der Ableitung bei t = 0
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p2 = Vec3::new(10.0, 0.0, 0.0);
        let curve = QuadraticBezier::new(p0, p0, p2);

        let tangent = curve.tangent_at(0.0);
        assert!(tangent.is_finite());
        // Fallback: Sehne p2−p0 zeigt in +X
        assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-5);
    }
}
