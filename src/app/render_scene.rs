//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::ControlPointId;
use crate::shared::{HandleVisual, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let dragged = state.drag.dragged_handle();
    let handles = ControlPointId::ALL.map(|id| HandleVisual {
        position: state.curve.position(id),
        active: dragged == Some(id),
        hovered: state.drag.hovered == Some(id),
    });

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        handles,
        options: state.options.clone(),
    }
}
