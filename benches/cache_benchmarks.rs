//! Cache Benchmarks
//!
//! Measures single-threaded and contended get/put throughput across shard
//! counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shard_cache::cache::fnv1a_32;
use shard_cache::ShardedCache;
use std::sync::Arc;
use std::thread;

const CAPACITY_PER_SHARD: usize = 4096;
const KEY_POOL: usize = 10_000;
const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 1_000;

fn key_pool() -> Vec<String> {
    (0..KEY_POOL).map(|i| format!("key-{:08}", i)).collect()
}

fn bench_hash(c: &mut Criterion) {
    let keys = key_pool();
    c.bench_function("fnv1a_32", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % KEY_POOL;
            black_box(fnv1a_32(keys[i].as_bytes()))
        });
    });
}

fn bench_single_thread(c: &mut Criterion) {
    let keys = key_pool();
    let value = "v".repeat(256);
    let cache = ShardedCache::new(64, CAPACITY_PER_SHARD);
    for key in &keys {
        cache.put(key, &value);
    }

    let mut group = c.benchmark_group("Single Thread");
    group.bench_function("get hit", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % KEY_POOL;
            black_box(cache.get(&keys[i]))
        });
    });
    group.bench_function("put overwrite", |b| {
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % KEY_POOL;
            cache.put(black_box(&keys[i]), &value);
        });
    });
    group.finish();
}

fn run_mixed(cache: &Arc<ShardedCache>, keys: &Arc<Vec<String>>) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(cache);
            let keys = Arc::clone(keys);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = &keys[(t * 7919 + i * 13) % KEY_POOL];
                    if i % 2 == 0 {
                        cache.put(key, "value");
                    } else {
                        black_box(cache.get(key));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        let _ = handle.join();
    }
}

fn bench_contended(c: &mut Criterion) {
    let keys = Arc::new(key_pool());

    let mut group = c.benchmark_group("Contended Mixed");
    group.throughput(Throughput::Elements((THREADS * OPS_PER_THREAD) as u64));

    for shards in [1usize, 8, 64] {
        let cache = Arc::new(ShardedCache::new(shards, KEY_POOL / shards + 1));
        group.bench_with_input(BenchmarkId::from_parameter(shards), &shards, |b, _| {
            b.iter(|| run_mixed(&cache, &keys));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hash, bench_single_thread, bench_contended);
criterion_main!(benches);
