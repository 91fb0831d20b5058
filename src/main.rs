//! Benchmark runner for the GEMM engine.
//!
//! Set `RUST_LOG=debug` to see the driver's dispatch decisions.

use blockgemm::{GemmConfig, Transpose, gemm_reference, gemm_with};
use log::info;
use std::time::Instant;

fn main() {
    env_logger::init();

    println!("=== Blocked GEMM Benchmark ===\n");

    let sizes = [256, 512, 1024];
    let iterations = 3;
    let workers = GemmConfig::new().max_workers();
    let mut all_results = Vec::new();

    println!("Available parallelism: {}\n", workers);

    for &size in &sizes {
        println!("Matrix: {}×{}", size, size);
        println!("{}", "-".repeat(50));

        let (m, n, k) = (size, size, size);
        let a: Vec<f64> = (0..m * k).map(|i| (i % 100) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i % 100) as f64).collect();

        let serial = GemmConfig::new().serial();
        let parallel = GemmConfig::new();

        let mut results: Vec<(&str, (f64, f64))> = Vec::new();
        // The triple loop is too slow to repeat at 1024.
        if size <= 512 {
            results.push((
                "Reference",
                bench_fn(&a, &b, m, n, k, 1, |a, b, c, m, n, k| {
                    gemm_reference(
                        Transpose::NoTrans,
                        Transpose::NoTrans,
                        m,
                        n,
                        k,
                        1.0,
                        a,
                        k,
                        b,
                        n,
                        0.0,
                        c,
                        n,
                    )
                }),
            ));
        }
        for (name, config, ta, tb) in [
            ("Serial NN", serial, Transpose::NoTrans, Transpose::NoTrans),
            ("Parallel NN", parallel, Transpose::NoTrans, Transpose::NoTrans),
            ("Parallel NT", parallel, Transpose::NoTrans, Transpose::Trans),
            ("Parallel TN", parallel, Transpose::Trans, Transpose::NoTrans),
            ("Parallel TT", parallel, Transpose::Trans, Transpose::Trans),
        ] {
            results.push((
                name,
                bench_fn(&a, &b, m, n, k, iterations, |a, b, c, m, n, k| {
                    if let Err(e) = gemm_with(&config, ta, tb, m, n, k, 1.0, a, k, b, n, 0.0, c, n) {
                        panic!("{name}: {e}");
                    }
                }),
            ));
        }

        // Print results
        let baseline_time = results[0].1.0;
        for (i, (name, (time_ms, gflops))) in results.iter().enumerate() {
            let speedup = baseline_time / time_ms;
            println!(
                "{}. {:16} {:8.2} ms  {:6.2} GFLOPS  ({:.1}×)",
                i + 1,
                name,
                time_ms,
                gflops,
                speedup
            );
        }
        println!();

        all_results.push((size, results));
    }

    print_summary_table(&all_results);
}

/// Time `f` on fresh zeroed outputs; returns (average ms, GFLOPS).
fn bench_fn<F>(
    a: &[f64],
    b: &[f64],
    m: usize,
    n: usize,
    k: usize,
    iterations: usize,
    f: F,
) -> (f64, f64)
where
    F: Fn(&[f64], &[f64], &mut [f64], usize, usize, usize),
{
    // Warmup
    let mut c = vec![0.0; m * n];
    f(a, b, &mut c, m, n, k);

    // Timed runs
    let mut total = 0.0;
    for _ in 0..iterations {
        let mut c = vec![0.0; m * n];
        let start = Instant::now();
        f(a, b, &mut c, m, n, k);
        total += start.elapsed().as_secs_f64();
    }

    let avg = total / iterations as f64;
    let gflops = 2.0 * (m * n * k) as f64 / avg / 1e9;
    info!("{m}x{n}x{k}: {:.3} ms over {iterations} runs", avg * 1000.0);
    (avg * 1000.0, gflops)
}

#[allow(clippy::type_complexity)]
fn print_summary_table(all_results: &[(usize, Vec<(&str, (f64, f64))>)]) {
    println!("\n{}", "=".repeat(70));
    println!("SUMMARY (GFLOPS)");
    println!("{}", "=".repeat(70));

    print!("\n{:<18}", "Method");
    for (size, _) in all_results {
        print!(" {:>14}", format!("{size}×{size}"));
    }
    println!();
    println!("{}", "-".repeat(70));

    // The smallest size runs every method.
    let Some((_, first)) = all_results.first() else {
        return;
    };
    for (method_name, _) in first {
        print!("{:<18}", method_name);
        for (_, results) in all_results {
            match results.iter().find(|(name, _)| name == method_name) {
                Some((_, (_, gflops))) => print!(" {:>11.2} GF", gflops),
                None => print!(" {:>14}", "-"),
            }
        }
        println!();
    }

    println!("{}", "=".repeat(70));
    println!("\nGF = GFLOPS (billion floating point operations per second)\n");
}
