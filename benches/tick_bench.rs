//! Benchmarks for the pure tick path
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use signscope::pipeline::{ModelKind, ProgressTracker, Stage, StagePlan};
use std::hint::black_box;

/// Build a plan with N one-second stages.
fn plan_with_stages(count: usize) -> StagePlan {
    let stages = (0..count)
        .map(|i| Stage::new(format!("stage-{}", i), "Stage", "", "", 1000))
        .collect();
    StagePlan::new(stages).expect("bench plan is valid")
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for size in [5usize, 50, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let plan = plan_with_stages(size);
            b.iter(|| {
                let mut tracker = ProgressTracker::new(plan.clone());
                for _ in 0..100 {
                    black_box(tracker.tick(100));
                }
                black_box(tracker.snapshot())
            });
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    c.bench_function("snapshot_iv3_gru_mid_run", |b| {
        let mut tracker = ProgressTracker::new(ModelKind::Iv3Gru.stage_plan());
        tracker.tick(4750);
        b.iter(|| black_box(tracker.snapshot()));
    });
}

criterion_group!(benches, bench_tick, bench_snapshot);
criterion_main!(benches);
