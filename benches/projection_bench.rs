//! Projection pipeline throughput.

// criterion_group! generates undocumented public items
#![allow(missing_docs)]

use bodyview::camera::projection::project;
use bodyview::camera::{controller, CameraState};
use bodyview::render::build_sprites;
use bodyview::scene::ScenePreset;
use bodyview::Vector3D;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn project_benchmark(c: &mut Criterion) {
    let mut camera = CameraState::new(800, 600);
    controller::handle_pointer_movement(&mut camera, 437.0, 281.0);
    let projection = camera.projection();
    let point = Vector3D::new(12.0, -40.0, 75.0);

    let _ = c.bench_function("project_single_point", |b| {
        b.iter(|| black_box(project(&projection, black_box(point))))
    });
}

fn build_sprites_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_sprites");
    let mut camera = CameraState::new(800, 600);
    controller::handle_pointer_movement(&mut camera, 420.0, 310.0);
    let projection = camera.projection();

    for count in [100, 1_000, 10_000].iter() {
        let mut rng = StdRng::seed_from_u64(7);
        let scene = ScenePreset::Dust.build(*count, &mut rng);

        let _ = group.bench_function(format!("{count}_bodies"), |b| {
            b.iter(|| black_box(build_sprites(&projection, &scene)))
        });
    }
    group.finish();
}

criterion_group!(benches, project_benchmark, build_sprites_benchmark);
criterion_main!(benches);
