use bezier_road_studio::{CurveState, QuadraticBezier, RibbonMesh, RoadGeometry};
use glam::Vec3;

fn demo_curve() -> QuadraticBezier {
    CurveState::new().curve()
}

#[test]
fn test_curve_endpoints_are_exact() {
    let curve = demo_curve();
    assert_eq!(curve.point_at(0.0), Vec3::new(-10.0, 0.0, 0.0));
    assert_eq!(curve.point_at(1.0), Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn test_ribbon_vertex_count_for_all_segment_counts() {
    let mut mesh = RibbonMesh::new();
    for segments in [2, 10, 100, 250] {
        mesh.rebuild(&demo_curve(), 2.0, segments);
        assert_eq!(mesh.vertex_count(), 2 * (segments + 1));
    }
}

#[test]
fn test_two_segment_ribbon_matches_curve_samples() {
    // Kleinster interessanter Fall: 3 Querschnitte bei t = 0, 0.5, 1
    let curve = demo_curve();
    let mut mesh = RibbonMesh::new();
    mesh.rebuild(&curve, 2.0, 2);

    assert_eq!(mesh.vertex_count(), 6);
    for (i, t) in [0.0f32, 0.5, 1.0].into_iter().enumerate() {
        let center = curve.point_at(t);
        let mid = (mesh.positions[2 * i] + mesh.positions[2 * i + 1]) / 2.0;
        assert!(
            (mid - center).length() < 1e-4,
            "Querschnitt {i} nicht mittig auf der Kurve"
        );
    }
}

#[test]
fn test_full_pipeline_rebuild_is_deterministic() {
    let state = CurveState::new();
    let mut a = RoadGeometry::new();
    let mut b = RoadGeometry::new();

    a.rebuild(&state, 2.0, 100);
    b.rebuild(&state, 2.0, 100);

    assert_eq!(a.ribbon, b.ribbon);
    assert_eq!(a.centerline, b.centerline);
    assert_eq!(a.handle_segments, b.handle_segments);
}

#[test]
fn test_degenerate_control_points_never_produce_nan() {
    let p = Vec3::new(4.0, -2.0, 1.0);
    let mut state = CurveState::new();
    state.p0 = p;
    state.control = p;
    state.p2 = p;

    let mut geometry = RoadGeometry::new();
    geometry.rebuild(&state, 2.0, 50);

    for position in &geometry.ribbon.positions {
        assert!(position.is_finite());
    }
    for normal in &geometry.ribbon.normals {
        assert!(normal.is_finite());
    }
    for point in &geometry.centerline {
        assert!(point.is_finite());
    }
}

#[test]
fn test_steep_curve_cross_sections_stay_horizontal() {
    // Hoher Steuerpunkt: die Tangente zeigt steil nach oben, der
    // Querschnitt darf sich trotzdem nicht aus der Horizontalen drehen.
    let mut state = CurveState::new();
    state.control = Vec3::new(0.0, 20.0, 0.0);
    let curve = state.curve();

    let mut mesh = RibbonMesh::new();
    mesh.rebuild(&curve, 2.0, 40);

    for i in 0..=40 {
        let left = mesh.positions[2 * i];
        let right = mesh.positions[2 * i + 1];
        assert!(
            (left.y - right.y).abs() < 1e-5,
            "Querschnitt {i} ist verkippt"
        );
        assert!((left.distance(right) - 2.0).abs() < 1e-4);
    }
}
