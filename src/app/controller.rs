//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(
        &self,
        state: &AppState,
        viewport_size: [f32; 2],
    ) -> crate::shared::RenderScene {
        super::render_scene::build(state, viewport_size)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        if !command.is_per_frame() {
            state.command_log.record(command.clone());
        }
        use super::handlers;

        match command {
            // === App-Lifecycle ===
            AppCommand::RequestExit => handlers::view::request_exit(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Drag & Hover ===
            AppCommand::BeginHandleDrag { ndc } => handlers::drag::begin(state, ndc),
            AppCommand::UpdateHandleDrag { ndc } => handlers::drag::update(state, ndc),
            AppCommand::EndHandleDrag => handlers::drag::end(state),
            AppCommand::HoverHandle { ndc } => handlers::drag::hover(state, ndc),

            // === Kamera ===
            AppCommand::OrbitCamera { delta } => handlers::view::orbit(state, delta),
            AppCommand::DollyCamera { factor } => handlers::view::dolly(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Kurve & Strasse ===
            AppCommand::SetControlPoint { id, position } => {
                handlers::curve_edit::set_control_point(state, id, position)
            }
            AppCommand::ResetCurve => handlers::curve_edit::reset_curve(state),
            AppCommand::SetRoadWidth { width } => handlers::curve_edit::set_road_width(state, width),
            AppCommand::SetRoadSegments { segments } => {
                handlers::curve_edit::set_road_segments(state, segments)
            }

            // === Animation ===
            AppCommand::SetAnimationEnabled { enabled } => {
                handlers::animation::set_enabled(state, enabled)
            }
            AppCommand::AdvanceAnimation { elapsed_seconds } => {
                handlers::animation::advance(state, elapsed_seconds)
            }

            // === Optionen-Dialog ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
        }

        Ok(())
    }
}
