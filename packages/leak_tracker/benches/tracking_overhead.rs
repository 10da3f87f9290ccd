//! Benchmarks to measure the compute overhead of `leak_tracker` logic itself.
//!
//! The layer promises near-zero cost when tracing is disabled, so the interesting
//! measurements are a disabled ambient hook (one relaxed atomic load) against the
//! enabled register/destroy round trip.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use leak_tracker::{Identity, Session, hooks, tracing};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("leak_tracker_overhead");

    let identity = Identity::from_addr(0x1000);

    // Baseline measurement - no tracking at all.
    group.bench_function("baseline_empty", |b| {
        b.iter(|| {
            black_box(identity);
        });
    });

    // The disabled path is what every wrapped call pays in a production-shaped build.
    tracing::disable();
    group.bench_function("ambient_hooks_disabled", |b| {
        b.iter(|| {
            hooks::mark_for_leak_detection(black_box(identity)).unwrap();
            hooks::reference(black_box(identity));
            hooks::destroy(black_box(identity)).unwrap();
        });
    });

    tracing::enable();
    group.bench_function("ambient_lifecycle_enabled", |b| {
        b.iter(|| {
            hooks::mark_for_leak_detection(black_box(identity)).unwrap();
            hooks::destroy(black_box(identity)).unwrap();
        });
    });
    tracing::disable();

    {
        let session = Session::new();

        group.bench_function("session_lifecycle", |b| {
            b.iter(|| {
                session.mark_for_leak_detection(black_box(identity)).unwrap();
                session.destroy(black_box(identity)).unwrap();
            });
        });

        let populated = Session::new();
        for n in 1..=1000_usize {
            populated
                .mark_for_leak_detection(Identity::from_addr(n * 0x10))
                .unwrap();
        }

        group.bench_function("reference_in_populated_registry", |b| {
            b.iter(|| {
                populated.reference(black_box(Identity::from_addr(0x500)));
            });
        });
    }

    group.finish();
}
