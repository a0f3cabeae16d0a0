use butterfly::{
    Configuration, compute,
    sweep::{AngleRange, ChordSelector, sweep_angle},
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_compute(c: &mut Criterion) {
    let config = Configuration::default();

    c.bench_function("compute_classic_diagram", |b| {
        b.iter(|| {
            let points = compute(black_box(&config)).expect("classic diagram is valid");
            black_box(points.xm())
        })
    });
}

fn bench_sweeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle_sweep");

    for &steps in &[180usize, 18_000usize] {
        let range = AngleRange::new(0.0, 179.99, steps);
        group.bench_with_input(BenchmarkId::new("chord_ab", steps), &range, |b, range| {
            b.iter(|| {
                let samples = sweep_angle(&Configuration::default(), ChordSelector::Ab, black_box(range));
                black_box(samples.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute, bench_sweeps);
criterion_main!(benches);
