//! Layer-übergreifend genutzte Typen (app ↔ render).

pub mod options;
pub mod render_scene;
pub mod ribbon_geometry;

pub use options::EditorOptions;
pub use render_scene::{HandleVisual, RenderScene};
pub use ribbon_geometry::{grid_triangles, RibbonMesh, RoadGeometry};
