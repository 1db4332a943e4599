//! 3D-Orbit-Kamera für den Viewport.

use glam::{Mat4, Vec2, Vec3};

/// Strahl in Welt-Koordinaten (für Picking und Drag-Projektion).
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ursprung des Strahls
    pub origin: Vec3,
    /// Normierte Richtung
    pub dir: Vec3,
}

/// Orbit-Kamera: Yaw/Pitch/Distanz um einen Zielpunkt
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Zielpunkt in Welt-Koordinaten
    pub target: Vec3,
    /// Horizontaler Orbit-Winkel (Radiant)
    pub yaw: f32,
    /// Vertikaler Orbit-Winkel (Radiant)
    pub pitch: f32,
    /// Abstand vom Zielpunkt
    pub distance: f32,
}

impl OrbitCamera {
    /// Vertikales Sichtfeld (Radiant).
    pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;
    /// Near-Plane.
    pub const Z_NEAR: f32 = 0.1;
    /// Far-Plane.
    pub const Z_FAR: f32 = 500.0;
    /// Minimaler Abstand zum Zielpunkt.
    pub const DISTANCE_MIN: f32 = 2.0;
    /// Maximaler Abstand zum Zielpunkt.
    pub const DISTANCE_MAX: f32 = 200.0;
    /// Pitch-Limit knapp unter ±90°, sonst kippt look_at.
    pub const PITCH_LIMIT: f32 = 1.54;

    /// Erstellt die Kamera in der Ausgangspose: Auge (0, 10, 20),
    /// Blick auf den Ursprung.
    pub fn new() -> Self {
        let eye = Vec3::new(0.0, 10.0, 20.0);
        let distance = eye.length();
        Self {
            target: Vec3::ZERO,
            yaw: 0.0,
            pitch: (eye.y / distance).asin(),
            distance,
        }
    }

    /// Augen-Position aus Yaw/Pitch/Distanz.
    pub fn eye(&self) -> Vec3 {
        let dir = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        self.target + dir * self.distance
    }

    /// Orbitiert die Kamera um den Zielpunkt.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    /// Ändert den Abstand zum Zielpunkt (Dolly).
    pub fn dolly(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(Self::DISTANCE_MIN, Self::DISTANCE_MAX);
    }

    /// View-Matrix (rechtshändig, +Y oben).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Projektions-Matrix für die gegebene Viewport-Größe.
    pub fn projection_matrix(&self, viewport_size: [f32; 2]) -> Mat4 {
        let aspect = (viewport_size[0] / viewport_size[1]).max(1e-3);
        Mat4::perspective_rh(Self::FOV_Y, aspect, Self::Z_NEAR, Self::Z_FAR)
    }

    /// Kombinierte View-Projektion (für Shader-Uniforms).
    pub fn view_projection(&self, viewport_size: [f32; 2]) -> Mat4 {
        self.projection_matrix(viewport_size) * self.view_matrix()
    }

    /// Unprojektion: NDC-Cursorposition → Welt-Strahl.
    ///
    /// `ndc` liegt in [−1, 1]² (x rechts, y oben). Der Strahl startet
    /// auf der Near-Plane und zeigt durch die Far-Plane.
    pub fn screen_to_ray(&self, ndc: Vec2, viewport_size: [f32; 2]) -> Ray {
        let inv = self.view_projection(viewport_size).inverse();
        // wgpu-Clipraum: z ∈ [0, 1]
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray {
            origin: near,
            dir: (far - near).normalize_or(Vec3::NEG_Z),
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_eye_position() {
        let camera = OrbitCamera::new();
        let eye = camera.eye();
        assert_relative_eq!(eye.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(eye.y, 10.0, epsilon = 1e-4);
        assert_relative_eq!(eye.z, 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_dolly_clamps_distance() {
        let mut camera = OrbitCamera::new();
        camera.dolly(1000.0);
        assert_relative_eq!(camera.distance, OrbitCamera::DISTANCE_MAX);
        camera.dolly(0.0001);
        assert_relative_eq!(camera.distance, OrbitCamera::DISTANCE_MIN);
    }

    #[test]
    fn test_orbit_clamps_pitch() {
        let mut camera = OrbitCamera::new();
        camera.orbit(0.0, 10.0);
        assert_relative_eq!(camera.pitch, OrbitCamera::PITCH_LIMIT);
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = OrbitCamera::new();
        let ray = camera.screen_to_ray(Vec2::ZERO, [800.0, 600.0]);
        // Bildschirm-Mitte: Strahl verläuft vom Auge Richtung Zielpunkt
        let to_target = (camera.target - camera.eye()).normalize();
        assert_relative_eq!(ray.dir.x, to_target.x, epsilon = 1e-3);
        assert_relative_eq!(ray.dir.y, to_target.y, epsilon = 1e-3);
        assert_relative_eq!(ray.dir.z, to_target.z, epsilon = 1e-3);
    }

    #[test]
    fn test_ray_origin_near_the_eye() {
        let camera = OrbitCamera::new();
        let ray = camera.screen_to_ray(Vec2::ZERO, [800.0, 600.0]);
        // Near-Plane liegt Z_NEAR vor dem Auge
        let eye_distance = (ray.origin - camera.eye()).length();
        assert!(
            eye_distance < 1.0,
            "Ursprung zu weit vom Auge: {eye_distance}"
        );
    }
}
