//! Seiten-Panel mit Kontrollpunkt-Editoren und Strassen-Parametern.

use crate::app::{AppIntent, AppState};
use crate::core::{ControlPointId, COORD_MAX, COORD_MIN};
use crate::shared::options::{ROAD_SEGMENTS_MAX, ROAD_SEGMENTS_MIN};

/// Rendert das Kontroll-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("control_panel")
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Kontrollpunkte");
            ui.separator();

            for id in ControlPointId::ALL {
                point_editor(ui, state, id, &mut events);
            }

            ui.separator();
            ui.heading("Strasse");

            let mut width = state.options.road_width;
            ui.horizontal(|ui| {
                ui.label("Breite:");
                if ui
                    .add(
                        egui::DragValue::new(&mut width)
                            .range(0.1..=20.0)
                            .speed(0.05),
                    )
                    .changed()
                {
                    events.push(AppIntent::RoadWidthChanged { width });
                }
            });

            let mut segments = state.options.road_segments;
            ui.horizontal(|ui| {
                ui.label("Segmente:");
                if ui
                    .add(
                        egui::DragValue::new(&mut segments)
                            .range(ROAD_SEGMENTS_MIN..=ROAD_SEGMENTS_MAX)
                            .speed(1),
                    )
                    .changed()
                {
                    events.push(AppIntent::RoadSegmentsChanged { segments });
                }
            });

            ui.separator();
            ui.heading("Animation");

            let mut enabled = state.animation.enabled;
            if ui.checkbox(&mut enabled, "Handle-Animation").changed() {
                events.push(AppIntent::AnimationToggled { enabled });
            }

            ui.separator();

            if ui.button("Kurve zurücksetzen").clicked() {
                events.push(AppIntent::ResetCurveRequested);
            }
            if ui.button("Kamera zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }
        });

    events
}

/// Editor-Zeilen für einen Kontrollpunkt (x/y/z im Panel-Bereich).
fn point_editor(
    ui: &mut egui::Ui,
    state: &AppState,
    id: ControlPointId,
    events: &mut Vec<AppIntent>,
) {
    let mut position = state.curve.position(id);
    let mut changed = false;

    ui.label(id.label());
    ui.horizontal(|ui| {
        for (label, value) in [
            ("x", &mut position.x),
            ("y", &mut position.y),
            ("z", &mut position.z),
        ] {
            ui.label(label);
            changed |= ui
                .add(
                    egui::DragValue::new(value)
                        .range(COORD_MIN..=COORD_MAX)
                        .speed(0.1),
                )
                .changed();
        }
    });
    ui.add_space(4.0);

    if changed {
        events.push(AppIntent::ControlPointEdited { id, position });
    }
}
