//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::DragMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::PointerPressed { ndc } => vec![AppCommand::BeginHandleDrag { ndc }],
        // Zustandsabhängig: während eines Handle-Drags folgt der Punkt
        // dem Cursor, sonst orbitet die Kamera.
        AppIntent::PointerDragged { ndc, delta } => match state.drag.mode {
            DragMode::Handle(_) => vec![AppCommand::UpdateHandleDrag { ndc }],
            DragMode::Orbit => vec![AppCommand::OrbitCamera {
                delta: delta * state.options.camera_orbit_sensitivity,
            }],
            DragMode::Idle => Vec::new(),
        },
        AppIntent::PointerReleased => vec![AppCommand::EndHandleDrag],
        // Hover nur im Ruhezustand, während eines Drags bleibt die
        // Hervorhebung auf dem gezogenen Handle.
        AppIntent::PointerHovered { ndc } => match state.drag.mode {
            DragMode::Idle => vec![AppCommand::HoverHandle { ndc }],
            _ => Vec::new(),
        },

        AppIntent::CameraOrbitRequested { delta } => vec![AppCommand::OrbitCamera {
            delta: delta * state.options.camera_orbit_sensitivity,
        }],
        AppIntent::CameraDollyRequested { scroll_steps } => vec![AppCommand::DollyCamera {
            factor: state.options.camera_dolly_step.powf(-scroll_steps),
        }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        AppIntent::ControlPointEdited { id, position } => {
            vec![AppCommand::SetControlPoint { id, position }]
        }
        AppIntent::ResetCurveRequested => vec![AppCommand::ResetCurve],
        AppIntent::RoadWidthChanged { width } => vec![AppCommand::SetRoadWidth { width }],
        AppIntent::RoadSegmentsChanged { segments } => {
            vec![AppCommand::SetRoadSegments { segments }]
        }

        AppIntent::AnimationToggled { enabled } => {
            vec![AppCommand::SetAnimationEnabled { enabled }]
        }
        AppIntent::AnimationTickRequested { elapsed_seconds } => {
            if state.animation.enabled {
                vec![AppCommand::AdvanceAnimation { elapsed_seconds }]
            } else {
                Vec::new()
            }
        }

        AppIntent::OptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::OptionsDialogClosed => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsResetRequested => vec![AppCommand::ResetOptions],
    }
}
