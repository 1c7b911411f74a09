use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use kinetic_curve::{cubic_bezier_tangent, mirror_through, sample_curve, DynamicPoint};
use std::hint::black_box;

fn bench_curve_sampling(c: &mut Criterion) {
    let p0 = Vec2::new(80.0, 225.0);
    let p1 = Vec2::new(240.0, 125.0);
    let p2 = Vec2::new(560.0, 325.0);
    let p3 = Vec2::new(720.0, 225.0);

    let mut group = c.benchmark_group("curve_sampling");
    for &step in &[0.01f32, 0.001f32] {
        group.bench_with_input(BenchmarkId::new("sample_curve", step), &step, |b, &step| {
            b.iter(|| {
                let points = sample_curve(
                    black_box(p0),
                    black_box(p1),
                    black_box(p2),
                    black_box(p3),
                    step,
                );
                black_box(points.len())
            })
        });
    }
    group.finish();

    c.bench_function("tangent_eval_5", |b| {
        b.iter(|| {
            let mut acc = Vec2::ZERO;
            for &t in &[0.1f32, 0.3, 0.5, 0.7, 0.9] {
                acc += cubic_bezier_tangent(black_box(p0), p1, p2, p3, t);
            }
            black_box(acc)
        })
    });
}

fn bench_spring_steps(c: &mut Criterion) {
    let center = Vec2::new(400.0, 225.0);
    let pointer = Vec2::new(123.0, 456.0);

    c.bench_function("spring_advance_1000", |b| {
        b.iter(|| {
            let mut control1 = DynamicPoint::at_rest(Vec2::new(240.0, 125.0));
            let mut control2 = DynamicPoint::at_rest(Vec2::new(560.0, 325.0));
            for _ in 0..1000 {
                control1.advance(black_box(pointer), 0.05, 0.8);
                control2.advance(mirror_through(center, pointer), 0.05, 0.8);
            }
            black_box((control1.pos, control2.pos))
        })
    });
}

criterion_group!(benches, bench_curve_sampling, bench_spring_steps);
criterion_main!(benches);
