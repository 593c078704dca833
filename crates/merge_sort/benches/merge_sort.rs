use std::hint::black_box;

use bench::{
    apply_large_runtime_config, apply_medium_runtime_config, apply_small_runtime_config,
    default_rng, nearly_sorted_u64s, random_u64s,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use merge_sort::{all_drivers, driver_name, merge_sort_with};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    fn generate(self, len: usize) -> Vec<u64> {
        let mut rng = default_rng();
        match self {
            Self::RandomUniform => random_u64s(&mut rng, len),
            Self::NearlySorted1pctSwaps => nearly_sorted_u64s(&mut rng, len),
        }
    }
}

const DISTRIBUTIONS: [Distribution; 2] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
];

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16384 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_merge_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("merge_sort/{}", dist.label()));

        for &size in &BENCH_SIZES {
            apply_runtime(&mut group, size);
            let base = dist.generate(size);

            for &driver in all_drivers() {
                group.bench_function(BenchmarkId::new(driver_name(driver), size), |bencher| {
                    bencher.iter(|| {
                        let mut data = base.clone();
                        merge_sort_with(driver, &mut data);
                        black_box(&data);
                    });
                });
            }

            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter(|| {
                    let mut data = base.clone();
                    data.sort();
                    black_box(&data);
                });
            });

            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter(|| {
                    let mut data = base.clone();
                    data.sort_unstable();
                    black_box(&data);
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_merge_sort);
criterion_main!(benches);
