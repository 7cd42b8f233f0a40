use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dllbest::{DllAvlTree, Redundancy};
use std::collections::BTreeSet;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn unique_tree(keys: &[i64]) -> DllAvlTree<i64> {
    let mut tree = DllAvlTree::with_capacity(Redundancy::Unique, keys.len());
    tree.extend(keys.iter().copied());
    tree
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("DllAvlTree", N), |b| {
        b.iter(|| {
            let mut tree = DllAvlTree::new(Redundancy::Unique);
            for &k in keys {
                tree.insert(k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_ordered(c: &mut Criterion) {
    bench_insert(c, "insert_ordered", &ordered_keys(N));
}

fn bench_insert_reverse(c: &mut Criterion) {
    bench_insert(c, "insert_reverse", &reverse_ordered_keys(N));
}

fn bench_insert_random(c: &mut Criterion) {
    bench_insert(c, "insert_random", &random_keys(N));
}

fn bench_insert_duplicates(c: &mut Criterion) {
    let keys: Vec<i64> = random_keys(N).into_iter().map(|k| k % 64).collect();

    c.bench_function("insert_duplicates/DllAvlTree", |b| {
        b.iter(|| {
            let mut tree = DllAvlTree::new(Redundancy::Redundant);
            for &k in &keys {
                tree.insert(k);
            }
            tree
        });
    });
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_contains_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = unique_tree(&keys);
    let set: BTreeSet<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("contains_random");

    group.bench_function(BenchmarkId::new("DllAvlTree", N), |b| {
        b.iter(|| keys.iter().filter(|&k| tree.contains(k)).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().filter(|&k| set.contains(k)).count());
    });

    group.finish();
}

fn bench_get_by_rank(c: &mut Criterion) {
    let tree = unique_tree(&random_keys(N));
    let set: BTreeSet<i64> = tree.iter().copied().collect();
    let ranks: Vec<usize> = (0..tree.len()).step_by(97).collect();

    let mut group = c.benchmark_group("get_by_rank");

    group.bench_function(BenchmarkId::new("DllAvlTree", N), |b| {
        b.iter(|| ranks.iter().filter_map(|&r| tree.get(r)).sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| ranks.iter().filter_map(|&r| set.iter().nth(r)).sum::<i64>());
    });

    group.finish();
}

// ─── Ordered walks ──────────────────────────────────────────────────────────

fn bench_walks(c: &mut Criterion) {
    let tree = unique_tree(&random_keys(N));
    let set: BTreeSet<i64> = tree.iter().copied().collect();

    let mut group = c.benchmark_group("ordered_walk");

    group.bench_function(BenchmarkId::new("DllAvlTree::iter", N), |b| {
        b.iter(|| tree.iter().sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("DllAvlTree::dll_dump", N), |b| {
        b.iter(|| tree.dll_dump());
    });

    group.bench_function(BenchmarkId::new("DllAvlTree::in_order", N), |b| {
        b.iter(|| tree.in_order());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.iter().sum::<i64>());
    });

    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let tree = unique_tree(&keys);
    let set: BTreeSet<i64> = keys.iter().copied().collect();
    let (lo, hi) = (N as i64 / 4, 3 * N as i64 / 4);

    let mut group = c.benchmark_group("range_half");

    group.bench_function(BenchmarkId::new("DllAvlTree", N), |b| {
        b.iter(|| tree.range(&lo, &hi).count());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.range(lo..=hi).count());
    });

    group.finish();
}

// ─── Remove ─────────────────────────────────────────────────────────────────

fn bench_remove(c: &mut Criterion, name: &str, keys: &[i64]) {
    let mut group = c.benchmark_group(name);

    group.bench_function(BenchmarkId::new("DllAvlTree", N), |b| {
        b.iter_batched(
            || unique_tree(keys),
            |mut tree| {
                for k in keys {
                    tree.remove(k);
                }
                tree
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| {
                for k in keys {
                    set.remove(k);
                }
                set
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_remove_ordered(c: &mut Criterion) {
    bench_remove(c, "remove_ordered", &ordered_keys(N));
}

fn bench_remove_random(c: &mut Criterion) {
    bench_remove(c, "remove_random", &random_keys(N));
}

fn bench_dequeue(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("dequeue_drain");

    group.bench_function(BenchmarkId::new("DllAvlTree", N), |b| {
        b.iter_batched(
            || unique_tree(&keys),
            |mut tree| std::iter::from_fn(|| tree.dequeue()).count(),
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeSet::pop_last", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<BTreeSet<i64>>(),
            |mut set| std::iter::from_fn(|| set.pop_last()).count(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(
    insert_benches,
    bench_insert_ordered,
    bench_insert_reverse,
    bench_insert_random,
    bench_insert_duplicates,
);

criterion_group!(lookup_benches, bench_contains_random, bench_get_by_rank);

criterion_group!(walk_benches, bench_walks, bench_range);

criterion_group!(remove_benches, bench_remove_ordered, bench_remove_random, bench_dequeue);

criterion_main!(insert_benches, lookup_benches, walk_benches, remove_benches);
