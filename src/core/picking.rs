//! Handle-Picking und Drag-Projektion.
//!
//! Pick: Strahl gegen Kugel-Marker an den drei Kontrollpunkten,
//! nächster Treffer gewinnt. Drag: Strahl gegen die feste z=0-Ebene,
//! die Ebene der Ausgangskurve.

use super::camera::Ray;
use super::curve_state::{ControlPointId, CurveState};
use glam::Vec3;

/// Strahl-Kugel-Schnitt: Distanz entlang des Strahls zum ersten
/// Schnittpunkt, `None` wenn der Strahl die Kugel verfehlt oder die
/// Kugel hinter dem Ursprung liegt.
pub fn ray_sphere_distance(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - ray.origin;
    let radius_sq = radius * radius;
    // Ursprung in der Kugel: sofortiger Treffer, auch wenn das Zentrum
    // knapp hinter dem Ursprung liegt
    if to_center.length_squared() <= radius_sq {
        return Some(0.0);
    }
    let projected = to_center.dot(ray.dir);
    if projected < 0.0 {
        return None;
    }
    let closest_sq = to_center.length_squared() - projected * projected;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    Some((projected - half_chord).max(0.0))
}

/// Strahl-Ebenen-Schnitt mit der z=0-Ebene.
///
/// `None` wenn der Strahl parallel zur Ebene verläuft oder von ihr
/// weg zeigt — der Aufrufer behandelt das als No-op für diesen Frame.
pub fn ray_drag_plane_intersection(ray: &Ray) -> Option<Vec3> {
    if ray.dir.z.abs() < f32::EPSILON {
        return None;
    }
    let t = -ray.origin.z / ray.dir.z;
    if t < 0.0 {
        return None;
    }
    Some(ray.origin + ray.dir * t)
}

/// Ermittelt den Kontrollpunkt-Handle unter dem Cursor.
///
/// Sammelt alle Kandidaten mit Strahl-Distanz und nimmt den nächsten
/// Treffer innerhalb von `pick_radius`.
pub fn pick_handle(ray: &Ray, curve: &CurveState, pick_radius: f32) -> Option<ControlPointId> {
    let mut candidates: Vec<(ControlPointId, f32)> = Vec::with_capacity(3);
    for id in ControlPointId::ALL {
        if let Some(distance) = ray_sphere_distance(ray, curve.position(id), pick_radius) {
            candidates.push((id, distance));
        }
    }

    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.first().map(|(id, _)| *id)
}
