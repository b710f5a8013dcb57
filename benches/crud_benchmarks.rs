use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

use bst_map::BstMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for a deterministic pseudo-random sequence.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn populated_bst(keys: &[i64]) -> BstMap<i64, i64> {
    let mut map = BstMap::new();
    for &k in keys {
        map.insert(k, k);
    }
    map
}

fn populated_btree(keys: &[i64]) -> BTreeMap<i64, i64> {
    let mut map = BTreeMap::new();
    for &k in keys {
        map.insert(k, k);
    }
    map
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────
//
// Only random key orders are benchmarked at full size: sorted insertion
// degrades an unbalanced BST to a linked list and O(n^2) total work.

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter(|| populated_bst(black_box(&keys)));
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| populated_btree(black_box(&keys)));
    });

    group.finish();
}

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst = populated_bst(&keys);
    let btree = populated_btree(&keys);
    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(bst.at(k).ok());
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(btree.get(k));
            }
        });
    });

    group.finish();
}

fn bench_erase_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("erase_random");

    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter_batched(
            || populated_bst(&keys),
            |mut map| {
                for k in &keys {
                    let _ = black_box(map.erase(k));
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || populated_btree(&keys),
            |mut map| {
                for k in &keys {
                    let _ = black_box(map.remove(k));
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let keys = random_keys(N);
    let bst = populated_bst(&keys);
    let btree = populated_btree(&keys);
    let mut group = c.benchmark_group("in_order_traversal");

    // The cursor mutates the map, so each run walks a fresh clone.
    group.bench_function(BenchmarkId::new("BstMap", N), |b| {
        b.iter_batched(
            || bst.clone(),
            |mut map| {
                map.begin();
                let mut sum = 0i64;
                while let Some((k, _)) = map.next() {
                    sum = sum.wrapping_add(k);
                }
                black_box(sum)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for (k, _) in &btree {
                sum = sum.wrapping_add(*k);
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_insert_random, bench_get_random, bench_erase_random, bench_traversal);
criterion_main!(benches);
