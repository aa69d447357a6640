use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use quantfft::core::ModelParams;
use quantfft::engines::fft::{CarrMadanConfig, LogNormalCf, carr_madan_at_strikes, carr_madan_curve};

fn bench_curve_sizes(c: &mut Criterion) {
    let params = ModelParams::new(100.0, 0.05, 0.2, 1.0);
    let cf = LogNormalCf::new(&params);

    let mut group = c.benchmark_group("carr_madan_curve");
    for n in [1024_usize, 4096, 16384] {
        let config = CarrMadanConfig::new(1.5, 0.25, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, config| {
            b.iter(|| {
                carr_madan_curve(
                    black_box(&cf),
                    black_box(params.rate),
                    black_box(params.maturity),
                    *config,
                )
                .expect("benchmark configuration is valid")
            })
        });
    }
    group.finish();
}

fn bench_strike_lookup(c: &mut Criterion) {
    let params = ModelParams::new(100.0, 0.05, 0.2, 1.0);
    let cf = LogNormalCf::new(&params);
    let strikes: Vec<f64> = (0..100).map(|i| 60.0 + i as f64 * 0.8).collect();

    c.bench_function("carr_madan_at_strikes_100", |b| {
        b.iter(|| {
            carr_madan_at_strikes(
                black_box(&cf),
                black_box(params.rate),
                black_box(params.maturity),
                black_box(&strikes),
                CarrMadanConfig::default(),
            )
            .expect("benchmark configuration is valid")
        })
    });
}

criterion_group!(benches, bench_curve_sizes, bench_strike_lookup);
criterion_main!(benches);
