//! Basic benchmarks for the `elastic_vec` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use elastic_vec::ElasticVec;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("ev_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(ElasticVec::<TestItem>::new()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_first");
    group.bench_function("push_first", |b| {
        b.iter_custom(|iters| {
            let mut vecs = iter::repeat_with(ElasticVec::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for vec in &mut vecs {
                vec.push(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_with_spare_capacity");
    group.bench_function("push_with_spare_capacity", |b| {
        b.iter_custom(|iters| {
            let mut vecs = iter::repeat_with(|| {
                let mut vec = ElasticVec::<TestItem>::new();
                vec.reserve(2);
                vec.push(TEST_VALUE);
                vec
            })
            .take(usize::try_from(iters).unwrap())
            .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for vec in &mut vecs {
                vec.push(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("push_10k_amortized");
    group.bench_function("push_10k_amortized", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut vec = ElasticVec::<TestItem>::new();

                for _ in 0..10_000 {
                    vec.push(black_box(TEST_VALUE));
                }

                drop(black_box(vec));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("read_one");
    group.bench_function("read_one", |b| {
        b.iter_custom(|iters| {
            let mut vec = ElasticVec::<TestItem>::new();
            vec.push(TEST_VALUE);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(vec.as_slice().first());
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_front_1k");
    group.bench_function("insert_front_1k", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                let mut vec = ElasticVec::<TestItem>::new();

                for _ in 0..1_000 {
                    vec.insert(0, black_box(TEST_VALUE));
                }

                drop(black_box(vec));
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
