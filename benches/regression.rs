use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use regression_lab::prelude::*;
use regression_lab_datasets::{generate_dataset_with_rng, DatasetKind};

fn bench(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let mut group = c.benchmark_group("regression_lab");
    let sizes: [usize; 3] = [20, 1_000, 100_000];

    for size in sizes {
        let points = generate_dataset_with_rng(DatasetKind::Noisy, size, &mut rng);

        group.bench_with_input(BenchmarkId::new("ols", size), &points, |b, points| {
            b.iter(|| fit(points));
        });
        group.bench_with_input(
            BenchmarkId::new("gradient_descent", size),
            &points,
            |b, points| {
                let params = GradientDescentParams::new()
                    .learning_rate(0.005)
                    .iterations(100)
                    .check_unwrap();
                b.iter(|| params.run(points));
            },
        );
    }

    let points = generate_dataset_with_rng(DatasetKind::Linear, 20, &mut rng);
    for resolution in [10, 30, 100] {
        group.bench_with_input(
            BenchmarkId::new("cost_surface", resolution),
            &resolution,
            |b, &resolution| {
                let params = CostSurfaceParams::new().resolution(resolution).check_unwrap();
                b.iter(|| params.sample(&points));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
