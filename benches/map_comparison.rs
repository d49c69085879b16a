use core::hint::black_box;

use criterion::BatchSize;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use long_map::LongMap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

const ELEMENTS: usize = 100_000;

fn keys(rng: &mut SmallRng) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..ELEMENTS as i64).collect();
    keys.shuffle(rng);
    keys
}

fn bench_insert(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0xDEAD_BEEF);
    let keys = keys(&mut rng);

    let mut group = c.benchmark_group(format!("insert_{ELEMENTS}"));
    group.throughput(Throughput::Elements(ELEMENTS as u64));

    group.bench_function("long_map", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut map = LongMap::new();
                for key in keys {
                    black_box(map.put(key, key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("std_hash_map", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut map = std::collections::HashMap::new();
                for key in keys {
                    black_box(map.insert(key, key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("hashbrown", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut map = hashbrown::HashMap::new();
                for key in keys {
                    black_box(map.insert(key, key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0xDEAD_BEEF);
    let keys = keys(&mut rng);

    let mut long_map = LongMap::new();
    let mut std_map = std::collections::HashMap::new();
    let mut hashbrown_map = hashbrown::HashMap::new();
    for &key in &keys {
        long_map.put(key, key);
        std_map.insert(key, key);
        hashbrown_map.insert(key, key);
    }

    // Half the probed keys miss.
    let probes: Vec<i64> = keys
        .iter()
        .map(|&key| {
            if rng.random::<bool>() {
                key
            } else {
                key + ELEMENTS as i64
            }
        })
        .collect();

    let mut group = c.benchmark_group(format!("lookup_{ELEMENTS}"));
    group.throughput(Throughput::Elements(ELEMENTS as u64));

    group.bench_function("long_map", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &key in &probes {
                if long_map.get(black_box(key)).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    group.bench_function("std_hash_map", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &key in &probes {
                if std_map.get(black_box(&key)).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    group.bench_function("hashbrown", |b| {
        b.iter(|| {
            let mut found = 0usize;
            for &key in &probes {
                if hashbrown_map.get(black_box(&key)).is_some() {
                    found += 1;
                }
            }
            black_box(found)
        });
    });

    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0xDEAD_BEEF);
    let keys = keys(&mut rng);

    let mut group = c.benchmark_group(format!("churn_{ELEMENTS}"));
    group.throughput(Throughput::Elements(ELEMENTS as u64));

    // Insert-then-remove every key, which exercises tombstone reuse and the
    // in-place purge rehash.
    group.bench_function("long_map", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut map = LongMap::new();
                for key in keys {
                    map.put(key, key);
                    black_box(map.remove(key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("std_hash_map", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut map = std::collections::HashMap::new();
                for key in keys {
                    map.insert(key, key);
                    black_box(map.remove(&key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("hashbrown", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut map = hashbrown::HashMap::new();
                for key in keys {
                    map.insert(key, key);
                    black_box(map.remove(&key));
                }
                black_box(map)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_churn);
criterion_main!(benches);
