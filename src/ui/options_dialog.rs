//! Optionen-Dialog für Farben, Größen und Animations-Parameter.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(450.0)
                .show(ui, |ui| {
                    // ── Handles ─────────────────────────────────────
                    ui.collapsing("Handles", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Radius (Welt):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.handle_radius_world)
                                        .range(0.1..=3.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Hover-Faktor:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.handle_hover_size_factor)
                                        .range(1.0..=3.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Farbe:", &mut opts.handle_color);
                        changed |= color_edit(ui, "Aktiv:", &mut opts.handle_color_active);
                    });

                    // ── Linien ──────────────────────────────────────
                    ui.collapsing("Linien", |ui| {
                        changed |= color_edit(ui, "Mittellinie:", &mut opts.centerline_color);
                        changed |= color_edit(ui, "Handle-Linien:", &mut opts.handle_line_color);
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Orbit-Empfindlichkeit:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_orbit_sensitivity)
                                        .range(0.001..=0.05)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Dolly-Schritt:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_dolly_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                    });

                    // ── Animation ───────────────────────────────────
                    ui.collapsing("Animation", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Amplitude:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.animation_amplitude)
                                        .range(0.0..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Frequenz:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.animation_frequency)
                                        .range(0.1..=10.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Verfolgung:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.animation_lerp_factor)
                                        .range(0.01..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Zeitskala:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.animation_time_scale)
                                        .range(0.1..=10.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::OptionsResetRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::OptionsDialogClosed);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
