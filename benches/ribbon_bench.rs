use bezier_road_studio::{CurveState, RibbonMesh, RoadGeometry};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_ribbon_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("ribbon_rebuild");
    let curve = CurveState::new().curve();

    for &segments in &[100usize, 1000usize] {
        let mut mesh = RibbonMesh::new();
        group.bench_with_input(
            BenchmarkId::new("segments", segments),
            &segments,
            |b, &segments| {
                b.iter(|| {
                    mesh.rebuild(black_box(&curve), black_box(2.0), segments);
                    black_box(mesh.vertex_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_full_geometry_rebuild(c: &mut Criterion) {
    let state = CurveState::new();
    let mut geometry = RoadGeometry::new();

    c.bench_function("road_geometry_rebuild_100", |b| {
        b.iter(|| {
            geometry.rebuild(black_box(&state), 2.0, 100);
            black_box(geometry.ribbon.vertex_count())
        })
    });
}

criterion_group!(benches, bench_ribbon_rebuild, bench_full_geometry_rebuild);
criterion_main!(benches);
