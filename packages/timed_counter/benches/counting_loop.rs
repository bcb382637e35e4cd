//! Benchmarks the counting loop with bounds small enough to sample repeatedly.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use timed_counter::TimedCounter;

fn counting_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_loop");

    for loop_bound in [1_000_u64, 100_000, 1_000_000] {
        let counter = TimedCounter::builder().loop_bound(loop_bound).build();

        group.bench_with_input(
            BenchmarkId::new("measure", loop_bound),
            &counter,
            |b, counter| {
                b.iter(|| black_box(counter.measure()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, counting_loop);
criterion_main!(benches);
