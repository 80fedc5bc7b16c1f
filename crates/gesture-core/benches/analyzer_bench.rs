//! Criterion benchmarks for the landmark analyzer.
//!
//! Both classifiers run once per hand per camera frame, so they must stay
//! far below a frame budget (33 ms at 30 fps).  These numbers should be in
//! the nanosecond range.
//!
//! Run with:
//! ```bash
//! cargo bench --package gesture-core --bench analyzer_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gesture_core::{calc_slope_xy, fingers_up, Handedness, LandmarkSet};

fn sample_hand() -> LandmarkSet {
    let coords: Vec<f32> = (0..42).map(|i| (i as f32 * 0.37).fract()).collect();
    LandmarkSet::from_flat(&coords).expect("42 coordinates")
}

fn bench_fingers_up(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer_fingers_up");
    let hand = sample_hand();

    group.bench_function("right", |b| {
        b.iter(|| fingers_up(black_box(&hand), black_box(Handedness::Right)))
    });
    group.bench_function("left", |b| {
        b.iter(|| fingers_up(black_box(&hand), black_box(Handedness::Left)))
    });

    group.finish();
}

fn bench_from_flat(c: &mut Criterion) {
    let coords: Vec<f32> = (0..42).map(|i| i as f32 / 42.0).collect();
    c.bench_function("analyzer_landmarks_from_flat", |b| {
        b.iter(|| LandmarkSet::from_flat(black_box(&coords)))
    });
}

fn bench_calc_slope(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyzer_calc_slope");

    group.bench_function("diagonal", |b| {
        b.iter(|| calc_slope_xy(black_box(0.2), black_box(0.4), black_box(0.7), black_box(0.5)))
    });
    // Sentinel branch (no division)
    group.bench_function("vertical", |b| {
        b.iter(|| calc_slope_xy(black_box(0.5), black_box(0.1), black_box(0.5), black_box(0.9)))
    });

    group.finish();
}

criterion_group!(benches, bench_fingers_up, bench_from_flat, bench_calc_slope);
criterion_main!(benches);
