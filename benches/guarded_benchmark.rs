use criterion::{black_box, criterion_group, criterion_main, Criterion};
use padlock::GuardedValue;
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, RwLock};
use std::thread;

#[derive(Clone, Default, Serialize, Deserialize)]
struct Config {
    name: String,
    workers: usize,
    weights: Vec<f64>,
}

fn sample() -> Config {
    Config {
        name: "bench".to_string(),
        workers: 8,
        weights: vec![0.5; 16],
    }
}

fn bench_uncontended(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended");

    group.bench_function("guarded_value_load", |b| {
        let guarded = GuardedValue::new(sample());
        b.iter(|| black_box(guarded.load()))
    });

    group.bench_function("std_rwlock_clone", |b| {
        let lock = RwLock::new(sample());
        b.iter(|| black_box(lock.read().unwrap().clone()))
    });

    group.bench_function("guarded_value_swap", |b| {
        let guarded = GuardedValue::new(0u64);
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            black_box(guarded.swap(i))
        })
    });

    group.bench_function("std_mutex_replace", |b| {
        let lock = Mutex::new(0u64);
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            black_box(std::mem::replace(&mut *lock.lock().unwrap(), i))
        })
    });

    group.finish();
}

fn bench_read_mostly(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_mostly");

    const READERS: usize = 4;
    const OPS: usize = 1_000;

    group.bench_function("guarded_value", |b| {
        let guarded = GuardedValue::new(sample());
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..READERS {
                    s.spawn(|| {
                        for _ in 0..OPS {
                            black_box(guarded.load().workers);
                        }
                    });
                }
                s.spawn(|| {
                    for _ in 0..OPS / 10 {
                        guarded.store(sample());
                    }
                });
            });
        })
    });

    group.bench_function("std_mutex", |b| {
        let lock = Mutex::new(sample());
        b.iter(|| {
            thread::scope(|s| {
                for _ in 0..READERS {
                    s.spawn(|| {
                        for _ in 0..OPS {
                            black_box(lock.lock().unwrap().clone().workers);
                        }
                    });
                }
                s.spawn(|| {
                    for _ in 0..OPS / 10 {
                        *lock.lock().unwrap() = sample();
                    }
                });
            });
        })
    });

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let guarded = GuardedValue::new(sample());
    let bytes = guarded.encode().unwrap();

    group.bench_function("encode", |b| b.iter(|| black_box(guarded.encode().unwrap())));
    group.bench_function("decode", |b| b.iter(|| guarded.decode(black_box(&bytes)).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_read_mostly, bench_codec);
criterion_main!(benches);
