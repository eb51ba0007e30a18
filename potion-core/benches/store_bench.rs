//! Benchmarks for the potion store facade.
//!
//! # Benchmark Goals
//!
//! 1. Insert throughput under each catalogue sort key
//! 2. Name lookup cost (full traversal, not a key search)
//! 3. Rebuild-based removal cost as the store grows
//! 4. Sort-key change (full rebuild)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use potion_core::{Order, OrderedStore, Potion, SortKey};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn generate_potions(count: usize, seed: u64) -> Vec<Potion> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            Potion::new(
                format!("potion-{i}"),
                rng.random_range(0..100_000),
                rng.random_range(0..100_000),
                rng.random_range(0..100_000),
            )
        })
        .collect()
}

fn filled_store(potions: &[Potion], sort_key: SortKey) -> OrderedStore {
    let mut store = OrderedStore::with_sort_key(sort_key);
    store.extend(potions.iter().cloned());
    store
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let potions = generate_potions(10_000, 1);
    group.throughput(Throughput::Elements(potions.len() as u64));

    for sort_key in SortKey::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(sort_key), &sort_key, |b, &sort_key| {
            b.iter(|| black_box(filled_store(&potions, sort_key)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1_000, 10_000] {
        let potions = generate_potions(size, 2);
        let store = filled_store(&potions, SortKey::Total);
        let last = format!("potion-{}", size - 1);

        group.bench_with_input(BenchmarkId::new("hit", size), &last, |b, name| {
            b.iter(|| black_box(store.search(black_box(name))));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |b, _| {
            b.iter(|| black_box(store.search(black_box("absent"))));
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_rebuild");
    group.sample_size(20);

    for size in [100, 1_000, 10_000] {
        let potions = generate_potions(size, 3);
        let name = format!("potion-{}", size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &name, |b, name| {
            b.iter_batched(
                || filled_store(&potions, SortKey::Strength),
                |mut store| black_box(store.remove(name)),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_resort_and_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("resort");
    group.sample_size(20);

    let potions = generate_potions(10_000, 4);

    group.bench_function("total_to_speed", |b| {
        b.iter_batched(
            || filled_store(&potions, SortKey::Total),
            |store| black_box(store.resort(SortKey::Speed)),
            criterion::BatchSize::LargeInput,
        );
    });

    let store = filled_store(&potions, SortKey::Health);
    group.bench_function("ordered_descending", |b| {
        b.iter(|| black_box(store.ordered(Order::Descending).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_remove, bench_resort_and_enumerate);

criterion_main!(benches);
