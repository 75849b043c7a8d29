//! Solver throughput.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use trajectory_lab::core::trajectory::{TrajectoryInput, compute, solve};

fn scenarios() -> Vec<(&'static str, TrajectoryInput)> {
    vec![
        ("standard", TrajectoryInput::default()),
        (
            "uniform",
            TrajectoryInput {
                a: 0.0,
                ..TrajectoryInput::default()
            },
        ),
        (
            "capped",
            TrajectoryInput {
                a: 0.5,
                ..TrajectoryInput::default()
            },
        ),
    ]
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for (name, input) in scenarios() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| solve(black_box(*input)))
        });
    }
    group.finish();
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_and_sample");
    for (name, input) in scenarios() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
            b.iter(|| compute(black_box(*input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_compute);
criterion_main!(benches);
