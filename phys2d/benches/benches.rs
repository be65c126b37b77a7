use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use phys2d::core::math::vec2;
use phys2d::shape::{PointSet, Shape};
use phys2d::transform::Transform;

fn ngon_pair(num_points: usize, offset: f64) -> (Shape<f64>, Shape<f64>) {
    let a = Shape::polygon(
        Transform::identity(),
        PointSet::regular_polygon(0.0, num_points, 1.0),
    );
    let b = Shape::polygon(
        Transform::new(vec2(offset, 0.0), 15.0),
        PointSet::regular_polygon(0.0, num_points, 1.0),
    );
    (a, b)
}

fn bench_intersects(b: &mut Bencher, shapes: &(Shape<f64>, Shape<f64>)) {
    b.iter(|| shapes.0.intersects(&shapes.1))
}

fn polygon_polygon_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_polygon_intersects");
    let vertex_counts = &[4, 8, 16, 64, 256];
    for &n in vertex_counts {
        group.bench_with_input(BenchmarkId::new("overlapping", n), &n, |b, n| {
            bench_intersects(b, &ngon_pair(*n, 1.0))
        });
        group.bench_with_input(BenchmarkId::new("disjoint_near", n), &n, |b, n| {
            bench_intersects(b, &ngon_pair(*n, 2.1))
        });
    }

    group.finish();
}

fn set_transform_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_transform_recompute");
    let vertex_counts = &[4, 16, 64, 256];
    for &n in vertex_counts {
        group.bench_with_input(BenchmarkId::new("polygon", n), &n, |b, n| {
            let mut shape = Shape::polygon(
                Transform::identity(),
                PointSet::regular_polygon(0.0, *n, 1.0),
            );
            let mut angle = 0.0;
            b.iter(|| {
                angle += 1.0;
                shape.set_transform(vec2(angle, 0.0), angle);
            })
        });
    }

    group.finish();
}

criterion_group!(intersects, polygon_polygon_group, set_transform_group);
criterion_main!(intersects);
