//! Kern-Datenmodell: Kurve, Kontrollpunkte, Kamera, Picking, Animation.

pub mod animation;
pub mod camera;
pub mod curve;
pub mod curve_state;
pub mod picking;

pub use animation::HandleAnimator;
pub use camera::{OrbitCamera, Ray};
pub use curve::QuadraticBezier;
pub use curve_state::{ControlPointId, CurveState, COORD_MAX, COORD_MIN};
pub use picking::{pick_handle, ray_drag_plane_intersection};
