use criterion::{black_box, criterion_group, criterion_main, Criterion};
use viz_core::{arithmetic_mean, linear_regression, variance};

fn series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n).map(|i| 1950.0 + i as f64 * 0.01).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.3).sin() * 5.0 + x * 0.02).collect();
    (xs, ys)
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");
    for &n in &[1_000usize, 100_000usize] {
        let (xs, ys) = series(n);
        group.bench_function(format!("mean_variance_{n}"), |b| {
            b.iter(|| {
                black_box(arithmetic_mean(black_box(&xs)).ok());
                black_box(variance(black_box(&ys)).ok());
            });
        });
        group.bench_function(format!("regression_{n}"), |b| {
            b.iter(|| black_box(linear_regression(black_box(&xs), black_box(&ys)).ok()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stats);
criterion_main!(benches);
