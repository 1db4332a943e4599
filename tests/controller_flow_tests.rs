use bezier_road_studio::{
    AppCommand, AppController, AppIntent, AppState, ControlPointId, CurveState, COORD_MAX,
};
use glam::{Vec2, Vec3};

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_panel_edit_moves_point_and_rebuilds_geometry() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.geometry.take_dirty(), "Initialer Rebuild erwartet");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ControlPointEdited {
                id: ControlPointId::Control,
                position: Vec3::new(0.0, 5.0, 2.0),
            },
        )
        .expect("ControlPointEdited sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve.control, Vec3::new(0.0, 5.0, 2.0));
    assert!(
        state.geometry.is_dirty(),
        "Kurven-Mutation muss die Geometrie neu bauen"
    );

    // Mittellinie folgt der neuen Kurve
    let mid = state.geometry.centerline[state.geometry.centerline.len() / 2];
    let expected = state.curve.curve().point_at(0.5);
    assert!((mid - expected).length() < 1e-4);
}

#[test]
fn test_panel_edit_is_clamped_to_panel_range() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ControlPointEdited {
                id: ControlPointId::P0,
                position: Vec3::new(999.0, -999.0, 0.0),
            },
        )
        .expect("ControlPointEdited sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve.p0.x, COORD_MAX);
    assert_eq!(state.curve.p0.y, -COORD_MAX);
}

#[test]
fn test_drag_lifecycle_moves_handle_on_drag_plane() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Steuerpunkt liegt bei (3, 15, 0); seine Bildschirmposition über
    // die Kamera ermitteln, damit der Pick sicher trifft.
    let control = state.curve.control;
    let view_proj = state
        .view
        .camera
        .view_projection(state.view.viewport_size);
    let clip = view_proj.project_point3(control);
    let ndc = Vec2::new(clip.x, clip.y);

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { ndc })
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert_eq!(
        state.drag.dragged_handle(),
        Some(ControlPointId::Control),
        "Druck auf den Marker muss den Steuerpunkt picken"
    );

    // Zur Bildschirmposition eines anderen Ebenen-Punkts ziehen
    let target = Vec3::new(5.0, 8.0, 0.0);
    let clip = view_proj.project_point3(target);
    let drag_ndc = Vec2::new(clip.x, clip.y);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                ndc: drag_ndc,
                delta: Vec2::ZERO,
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");

    assert!(
        (state.curve.control - target).length() < 0.05,
        "Handle muss dem Cursor auf der Drag-Ebene folgen: {:?}",
        state.curve.control
    );
    assert!(state.geometry.is_dirty());

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
    assert_eq!(state.drag.dragged_handle(), None);
}

#[test]
fn test_press_on_empty_space_orbits_instead_of_dragging() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let yaw_before = state.view.camera.yaw;

    // Bildschirm-Ecke: dort liegt kein Handle
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                ndc: Vec2::new(0.95, 0.95),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    assert_eq!(state.drag.dragged_handle(), None);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                ndc: Vec2::new(0.9, 0.9),
                delta: Vec2::new(20.0, 0.0),
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");

    assert_ne!(
        state.view.camera.yaw, yaw_before,
        "Drag ohne Handle-Treffer muss die Kamera orbitieren"
    );
    // Kurve bleibt unverändert
    assert_eq!(state.curve, CurveState::new());
}

#[test]
fn test_animation_tick_is_dropped_while_disabled() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.curve.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::AnimationTickRequested {
                elapsed_seconds: 1.0,
            },
        )
        .expect("Tick sollte ohne Fehler durchlaufen");

    assert_eq!(state.curve, before, "Tick ohne aktive Animation ist No-op");
}

#[test]
fn test_animation_tick_applies_flap_and_chase() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AnimationToggled { enabled: true })
        .expect("AnimationToggled sollte ohne Fehler durchlaufen");

    // Zeitskala 3.0: elapsed = (π/2)/3 ergibt Phase π/2 → sin = 1
    let elapsed = std::f64::consts::FRAC_PI_2 / 3.0;
    controller
        .handle_intent(
            &mut state,
            AppIntent::AnimationTickRequested {
                elapsed_seconds: elapsed,
            },
        )
        .expect("Tick sollte ohne Fehler durchlaufen");

    assert!((state.curve.control.y - 7.0).abs() < 1e-4);
    assert!((state.curve.p2.y - 0.7).abs() < 1e-4);
    assert!(state.geometry.is_dirty());
}

#[test]
fn test_road_params_update_vertex_count() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::RoadSegmentsChanged { segments: 10 })
        .expect("RoadSegmentsChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.geometry.ribbon.vertex_count(), 22);

    controller
        .handle_intent(&mut state, AppIntent::RoadWidthChanged { width: 4.0 })
        .expect("RoadWidthChanged sollte ohne Fehler durchlaufen");
    let left = state.geometry.ribbon.positions[0];
    let right = state.geometry.ribbon.positions[1];
    assert!((left.distance(right) - 4.0).abs() < 1e-4);
}

#[test]
fn test_camera_commands_orbit_dolly_and_reset() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let initial = state.view.camera.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraOrbitRequested {
                delta: Vec2::new(30.0, 10.0),
            },
        )
        .expect("CameraOrbitRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraDollyRequested { scroll_steps: 2.0 },
        )
        .expect("CameraDollyRequested sollte ohne Fehler durchlaufen");
    assert_ne!(state.view.camera, initial);

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("ResetCameraRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.camera, initial);
}

#[test]
fn test_user_commands_are_logged_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.command_log.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::ResetCurveRequested)
        .expect("ResetCurveRequested sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .expect("ResetCameraRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.command_log.len(), 2);
    assert!(matches!(
        state.command_log.entries()[0],
        AppCommand::ResetCurve
    ));
}

#[test]
fn test_per_frame_commands_stay_out_of_the_log() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AnimationToggled { enabled: true })
        .expect("AnimationToggled sollte ohne Fehler durchlaufen");
    assert_eq!(state.command_log.len(), 1);

    // Viewport-Größe und Animations-Ticks fallen jeden Frame an und
    // dürfen das Log nicht fluten
    for frame in 0..50 {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ViewportResized {
                    size: [1280.0, 720.0],
                },
            )
            .expect("ViewportResized sollte ohne Fehler durchlaufen");
        controller
            .handle_intent(
                &mut state,
                AppIntent::AnimationTickRequested {
                    elapsed_seconds: frame as f64 / 60.0,
                },
            )
            .expect("Tick sollte ohne Fehler durchlaufen");
    }

    assert_eq!(
        state.command_log.len(),
        1,
        "Per-Frame-Commands dürfen nicht geloggt werden"
    );
    assert!(matches!(
        state.command_log.entries()[0],
        AppCommand::SetAnimationEnabled { enabled: true }
    ));
}

#[test]
fn test_options_dialog_flow_applies_and_resets() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OptionsDialogRequested)
        .expect("OptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(state.show_options_dialog);

    let mut options = state.options.clone();
    options.animation_amplitude = 12.0;
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.options.animation_amplitude, 12.0);

    controller
        .handle_intent(&mut state, AppIntent::OptionsResetRequested)
        .expect("OptionsResetRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.options.animation_amplitude, 7.0);

    controller
        .handle_intent(&mut state, AppIntent::OptionsDialogClosed)
        .expect("OptionsDialogClosed sollte ohne Fehler durchlaufen");
    assert!(!state.show_options_dialog);
}
