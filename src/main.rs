//! Bezier Road Studio.
//!
//! Interaktiver 3D-Editor für ein Strassenband entlang einer
//! quadratischen Bezierkurve, mit egui + wgpu.

use bezier_road_studio::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use eframe::egui_wgpu;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier Road Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bezier Road Studio"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier Road Studio",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        // Per-Frame-Intents (Viewport-Größe, Animations-Tick) zählen
        // nicht als Aktivität, sonst liefe der Repaint-Loop dauerhaft.
        let has_meaningful_events = events.iter().any(|e| !e.is_per_frame());

        self.process_events(events);

        self.sync_geometry_upload();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_control_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        // Animations-Tick aus der App-Uhr; das Mapping verwirft ihn,
        // wenn die Animation aus ist.
        events.push(AppIntent::AnimationTickRequested {
            elapsed_seconds: self.state.animation.elapsed_seconds(),
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, viewport_size),
                );

                let render_data = render::WgpuRenderData {
                    scene: self
                        .controller
                        .build_render_scene(&self.state, viewport_size),
                };

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    /// Lädt die abgeleitete Geometrie hoch, wenn sie seit dem letzten
    /// Frame neu gebaut wurde.
    fn sync_geometry_upload(&mut self) {
        if !self.state.geometry.take_dirty() {
            return;
        }

        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
            return;
        };
        renderer.upload_geometry(
            &self.device,
            &self.queue,
            &self.state.geometry,
            &self.state.options,
        );
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if self.state.animation.enabled {
            // Kontinuierlich neu zeichnen, solange die Animation läuft
            ctx.request_repaint();
            return;
        }
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
