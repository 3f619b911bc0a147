//! Criterion cross-check for the five fan-out patterns.
//!
//! The in-crate engine produces the sweep's leaderboards; this bench runs
//! the same cases under criterion so the two measurement paths can be
//! compared.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use joinmark::{patterns, Deferred, SetupMode};

fn configure_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .noise_threshold(0.05)
        .warm_up_time(std::time::Duration::from_secs(3))
}

fn bench_patterns(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    for count in [10usize, 1000] {
        let mut group = c.benchmark_group(format!("fanout_{count}"));

        for (name, factory) in patterns() {
            let mut case = factory(count, SetupMode::Rebuild);
            group.bench_function(BenchmarkId::from_parameter(name), |b| {
                b.iter(|| {
                    rt.block_on(async {
                        let (deferred, signal) = Deferred::new();
                        case(deferred).await;
                        signal.await.unwrap();
                    })
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = pattern_benches;
    config = configure_criterion();
    targets = bench_patterns
}
criterion_main!(pattern_benches);
