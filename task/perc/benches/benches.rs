use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perc::{run_trial, Percolation};
use rand::{rngs::StdRng, SeedableRng};

fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    for size in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter(|| run_trial(size, &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_open_all(c: &mut Criterion) {
    c.bench_function("open_all_128", |b| {
        b.iter(|| {
            let mut percolation = Percolation::new(128).unwrap();
            for row in 1..=128 {
                for col in 1..=128 {
                    percolation.open(row, col).unwrap();
                }
            }
            percolation.percolates()
        })
    });
}

criterion_group!(benches, bench_trial, bench_open_all);
criterion_main!(benches);
