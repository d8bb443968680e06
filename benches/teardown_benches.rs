use chain_collections::linked_list::{
    arena::ArenaList, owned::OwnedList, shared::SharedList, traits::List,
};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, rng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = rng();
    (0..len).map(|_| rng.random()).collect()
}

// --- Push ---

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("owned", size), &values, |b, values| {
            b.iter(|| {
                let mut list = OwnedList::new();
                for &value in values {
                    list.push(value);
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("arena", size), &values, |b, values| {
            b.iter(|| {
                let mut list = ArenaList::with_capacity(values.len());
                for &value in values {
                    list.push(value);
                }
                black_box(list)
            });
        });
    }

    group.finish();
}

// --- Teardown ---

fn teardown_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("teardown");

    for size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("owned", size), &values, |b, values| {
            b.iter_batched(
                || values.iter().copied().collect::<OwnedList<u64>>(),
                drop,
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("arena", size), &values, |b, values| {
            b.iter_batched(
                || values.iter().copied().collect::<ArenaList<u64>>(),
                drop,
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("shared", size), &values, |b, values| {
            b.iter_batched(
                || values.iter().copied().collect::<SharedList<u64>>(),
                drop,
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, push_benchmark, teardown_benchmark);
criterion_main!(benches);
