use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pointcanvas::canvas::{shapes, CanvasConfig, LodData};

use glam::Vec3;

fn sphere_soup(radius: f32) -> Vec<Vec3> {
    shapes::sphere(Vec3::splat(radius), radius, 24, 48)
}

fn bench_add_points_sphere_16(c: &mut Criterion) {
    let vertices = sphere_soup(16.0);

    c.bench_function("add_points_sphere_16", |b| {
        b.iter(|| {
            let lod = LodData::new(CanvasConfig::default());
            lod.add_points(black_box(&vertices)).ok();
            black_box(lod.stats())
        });
    });
}

fn bench_add_points_sphere_48(c: &mut Criterion) {
    let vertices = sphere_soup(48.0);

    c.bench_function("add_points_sphere_48", |b| {
        b.iter(|| {
            let lod = LodData::new(CanvasConfig::default());
            lod.add_points(black_box(&vertices)).ok();
            black_box(lod.stats())
        });
    });
}

fn bench_edit_identity(c: &mut Criterion) {
    let vertices = sphere_soup(16.0);

    c.bench_function("edit_identity_sphere_16", |b| {
        b.iter_batched(
            || {
                let lod = LodData::new(CanvasConfig::default());
                lod.add_points(&vertices).ok();
                lod
            },
            |lod| {
                lod.edit_points(|_| true, |_| {}).ok();
                black_box(lod.render_counter())
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn sample_positions(count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32;
            Vec3::new(
                (t * 0.37).fract() * extent,
                (t * 0.61).fract() * extent,
                (t * 0.83).fract() * extent,
            )
        })
        .collect()
}

fn bench_sample_distances(c: &mut Criterion) {
    let lod = LodData::new(CanvasConfig::default());
    lod.add_points(&sphere_soup(16.0)).ok();
    let positions = sample_positions(64 * 1024, 32.0);

    c.bench_function("sample_distances_nearest_64k", |b| {
        b.iter(|| black_box(lod.sample_distances(black_box(&positions), false)));
    });

    c.bench_function("sample_distances_trilinear_64k", |b| {
        b.iter(|| black_box(lod.sample_distances(black_box(&positions), true)));
    });
}

criterion_group!(
    benches,
    bench_add_points_sphere_16,
    bench_add_points_sphere_48,
    bench_edit_identity,
    bench_sample_distances,
);
criterion_main!(benches);
