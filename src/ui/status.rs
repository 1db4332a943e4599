//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::ControlPointId;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let control = state.curve.position(ControlPointId::Control);
            ui.label(format!(
                "Steuerpunkt: ({:.1}, {:.1}, {:.1})",
                control.x, control.y, control.z
            ));

            ui.separator();

            ui.label(format!(
                "Vertices: {} | Segmente: {}",
                state.geometry.ribbon.vertex_count(),
                state.options.road_segments
            ));

            ui.separator();

            if let Some(id) = state.drag.dragged_handle() {
                ui.label(format!("Ziehe: {}", id.label()));
            } else if let Some(id) = state.drag.hovered {
                ui.label(format!("Hover: {}", id.label()));
            } else {
                ui.label("Bereit");
            }

            if state.animation.enabled {
                ui.separator();
                ui.label("Animation läuft");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
