use blockgemm::{GemmConfig, Transpose, gemm_with};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_gemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemm");

    for &size in &[64usize, 128, 256, 512] {
        let a: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..size * size).map(|i| (i % 100) as f64).collect();
        let mut out = vec![0.0; size * size];
        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        for (name, config) in [
            ("serial", GemmConfig::new().serial()),
            ("parallel", GemmConfig::new()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |bench, &s| {
                bench.iter(|| {
                    gemm_with(
                        &config,
                        Transpose::NoTrans,
                        Transpose::NoTrans,
                        s,
                        s,
                        s,
                        1.0,
                        black_box(&a),
                        s,
                        black_box(&b),
                        s,
                        0.0,
                        &mut out,
                        s,
                    )
                    .unwrap()
                })
            });
        }
    }

    group.finish();
}

fn bench_transposes(c: &mut Criterion) {
    let size = 256;
    let a: Vec<f64> = (0..size * size).map(|i| (i % 17) as f64).collect();
    let b: Vec<f64> = (0..size * size).map(|i| (i % 13) as f64).collect();
    let mut out = vec![0.0; size * size];
    let config = GemmConfig::new();

    let mut group = c.benchmark_group("dgemm_transpose");
    for (ta, tb) in [
        (Transpose::NoTrans, Transpose::NoTrans),
        (Transpose::NoTrans, Transpose::Trans),
        (Transpose::Trans, Transpose::NoTrans),
        (Transpose::Trans, Transpose::Trans),
    ] {
        group.bench_function(format!("{ta}{tb}"), |bench| {
            bench.iter(|| {
                gemm_with(
                    &config, ta, tb, size, size, size, 1.0, &a, size, &b, size, 0.0, &mut out,
                    size,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gemm, bench_transposes);
criterion_main!(benches);
