//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.

use crate::app::AppIntent;
use glam::Vec2;

/// Scroll-Pixel pro Dolly-Raste.
const SCROLL_PIXELS_PER_STEP: f32 = 50.0;

/// Verwaltet den Input-Zustand für das Viewport (Drag, Hover, Scroll)
#[derive(Default)]
pub struct InputState {
    primary_drag_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        let rect = response.rect;

        // ── Primärer Drag-Lifecycle (Handle-Drag oder Orbit) ────────
        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.primary_drag_active = true;
                events.push(AppIntent::PointerPressed {
                    ndc: to_ndc(pos, rect),
                });
            }
        }

        if self.primary_drag_active && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let delta = response.drag_delta();
                events.push(AppIntent::PointerDragged {
                    ndc: to_ndc(pos, rect),
                    delta: Vec2::new(delta.x, delta.y),
                });
            }
        }

        if self.primary_drag_active && response.drag_stopped_by(egui::PointerButton::Primary) {
            self.primary_drag_active = false;
            events.push(AppIntent::PointerReleased);
        }

        // ── Hover (nur ohne aktiven Drag) ───────────────────────────
        if !self.primary_drag_active && response.hovered() {
            if let Some(pos) = response.hover_pos() {
                events.push(AppIntent::PointerHovered {
                    ndc: to_ndc(pos, rect),
                });
            }
        }

        // ── Sekundärer Drag: immer Kamera-Orbit ─────────────────────
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraOrbitRequested {
                    delta: Vec2::new(delta.x, delta.y),
                });
            }
        }

        // ── Scroll: Dolly ───────────────────────────────────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                events.push(AppIntent::CameraDollyRequested {
                    scroll_steps: scroll / SCROLL_PIXELS_PER_STEP,
                });
            }
        }

        events
    }
}

/// Cursorposition → normalisierte Gerätekoordinaten des Viewports.
/// x rechts, y oben, jeweils in [-1, 1].
fn to_ndc(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let u = (pos.x - rect.min.x) / rect.width().max(1.0);
    let v = (pos.y - rect.min.y) / rect.height().max(1.0);
    Vec2::new(2.0 * u - 1.0, 1.0 - 2.0 * v)
}

#[cfg(test)]
mod tests {
    use super::to_ndc;
    use approx::assert_relative_eq;

    #[test]
    fn test_ndc_conversion_corners_and_center() {
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(800.0, 600.0));

        let center = to_ndc(egui::pos2(500.0, 350.0), rect);
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-5);

        let top_left = to_ndc(egui::pos2(100.0, 50.0), rect);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = to_ndc(egui::pos2(900.0, 650.0), rect);
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }
}
