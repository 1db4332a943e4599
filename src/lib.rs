//! Bezier Road Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CommandLog};
pub use core::{
    ControlPointId, CurveState, HandleAnimator, OrbitCamera, QuadraticBezier, Ray, COORD_MAX,
    COORD_MIN,
};
pub use shared::{EditorOptions, RenderScene, RibbonMesh, RoadGeometry};
