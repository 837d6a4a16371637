use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scout_confidence::ConfidenceEngine;
use scout_core::models::{CategoryState, Classification, Confidence};

fn bench_apply(c: &mut Criterion) {
    let engine = ConfidenceEngine::new();
    let state = CategoryState {
        accepted_count: 3,
        ..CategoryState::default()
    };

    c.bench_function("confidence_apply_accept", |b| {
        b.iter(|| {
            engine.apply(
                black_box(Confidence::new(0.42)),
                black_box(Classification::Accept),
                black_box(&state),
                black_box(1.1),
            )
        })
    });
}

criterion_group!(benches, bench_apply);
criterion_main!(benches);
