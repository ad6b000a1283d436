use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadric_geom::{Cone3, Line3, Sphere3};
use quadric_intersect::{intersect_line_cone, intersect_line_sphere};
use quadric_math::{Point3, Vec3};
use std::f64::consts::FRAC_PI_4;

fn bench_line_cone(c: &mut Criterion) {
    let cone = Cone3::from_half_angle(Point3::origin(), Vec3::z(), FRAC_PI_4).unwrap();
    // Cosine one ulp below sqrt(2)/2, so the squared cosine rounds below
    // 1/2 and the tangent line's discriminant stays non-negative.
    let tangent_cone = Cone3::new(Point3::origin(), Vec3::z(), 0.7071067811865475);
    let segment = Line3::new(Point3::new(-10.0, 0.0, 1.0), Vec3::x());
    let tangent = Line3::new(Point3::new(1.0, 0.0, 1.0), Vec3::y());
    let embedded = Line3::new(Point3::new(1.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 1.0));

    c.bench_function("line_cone_segment", |b| {
        b.iter(|| intersect_line_cone(black_box(&segment), black_box(&cone)))
    });
    c.bench_function("line_cone_tangent", |b| {
        b.iter(|| intersect_line_cone(black_box(&tangent), black_box(&tangent_cone)))
    });
    c.bench_function("line_cone_embedded", |b| {
        b.iter(|| intersect_line_cone(black_box(&embedded), black_box(&cone)))
    });
}

fn bench_line_sphere(c: &mut Criterion) {
    let sphere = Sphere3::new(Point3::origin(), 5.0);
    let line = Line3::new(Point3::new(-10.0, 0.0, 0.0), Vec3::x());

    c.bench_function("line_sphere_segment", |b| {
        b.iter(|| intersect_line_sphere(black_box(&line), black_box(&sphere)))
    });
}

criterion_group!(benches, bench_line_cone, bench_line_sphere);
criterion_main!(benches);
