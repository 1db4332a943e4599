//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Bearbeiten", |ui| {
                if ui.button("Kurve zurücksetzen").clicked() {
                    events.push(AppIntent::ResetCurveRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                ui.separator();

                let label = if state.animation.enabled {
                    "Animation anhalten"
                } else {
                    "Animation starten"
                };
                if ui.button(label).clicked() {
                    events.push(AppIntent::AnimationToggled {
                        enabled: !state.animation.enabled,
                    });
                    ui.close();
                }
            });
        });
    });

    events
}
