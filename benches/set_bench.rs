use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use linkset::bounded::{EvictionConfig, ExhaustiveSet};
use linkset::set::OrderedSet;

fn bench_ordered_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_set");

    for &n in &[1_000u64, 100_000u64] {
        group.bench_with_input(BenchmarkId::new("add", n), &n, |b, &n| {
            b.iter(|| {
                let set: OrderedSet<u64> = (0..n).collect();
                black_box(set);
            });
        });

        group.bench_with_input(BenchmarkId::new("add_discard_churn", n), &n, |b, &n| {
            let mut set: OrderedSet<u64> = (0..n).collect();
            let mut next = n;
            b.iter(|| {
                set.discard(&(next - n));
                set.add(next);
                next += 1;
            });
        });

        group.bench_with_input(BenchmarkId::new("pop_all", n), &n, |b, &n| {
            b.iter_batched(
                || (0..n).collect::<OrderedSet<u64>>(),
                |mut set| {
                    while let Ok(k) = set.pop() {
                        black_box(k);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive_set");

    for &limit in &[100usize, 10_000usize] {
        group.bench_with_input(BenchmarkId::new("steady_state_add", limit), &limit, |b, &limit| {
            let mut set = ExhaustiveSet::new(limit).expect("positive limit");
            let mut next = 0u64;
            b.iter(|| {
                set.add(next).expect("no hook");
                next += 1;
            });
        });

        group.bench_with_input(BenchmarkId::new("bulk_evict", limit), &limit, |b, &limit| {
            b.iter(|| {
                let set = ExhaustiveSet::from_keys(EvictionConfig::with_limit(limit), 0..100_000u64)
                    .expect("no hook");
                black_box(set.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ordered_set, bench_exhaustive);
criterion_main!(benches);
