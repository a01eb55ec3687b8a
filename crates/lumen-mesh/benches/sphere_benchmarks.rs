use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use lumen_mesh::*;

fn bench_tessellate_low(c: &mut Criterion) {
    c.bench_function("tessellate_sphere_10x10", |bencher| {
        bencher.iter(|| black_box(tessellate_sphere(black_box(400.0), 10, 10)))
    });
}

fn bench_tessellate_high(c: &mut Criterion) {
    c.bench_function("tessellate_sphere_128x64", |bencher| {
        bencher.iter(|| black_box(tessellate_sphere(black_box(1.0), 128, 64)))
    });
}

fn bench_triangle_list(c: &mut Criterion) {
    let mesh = tessellate_sphere(1.0, 64, 32).unwrap();
    c.bench_function("sphere_to_triangle_list_64x32", |bencher| {
        bencher.iter(|| black_box(mesh.to_triangle_list()))
    });
}

fn bench_bezier_sample(c: &mut Criterion) {
    let curve = CubicBezier::new(
        Vec3::new(-0.773, 2.899, 0.0),
        Vec3::new(-3.092, 11.595, 0.0),
        Vec3::new(3.092, 11.595, 0.0),
        Vec3::new(0.773, 2.899, 0.0),
    );
    c.bench_function("bezier_sample_25", |bencher| {
        bencher.iter(|| black_box(curve.sample(black_box(25))))
    });
}

criterion_group!(
    benches,
    bench_tessellate_low,
    bench_tessellate_high,
    bench_triangle_list,
    bench_bezier_sample
);
criterion_main!(benches);
