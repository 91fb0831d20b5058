//! Property tests for the blocked GEMM engine.
//!
//! 1. **Reference equivalence** – any shape, any transpose pair, any block
//!    size agrees with the unblocked triple loop.
//! 2. **Serial/parallel equivalence** – worker count never changes the
//!    result bits.
//! 3. **Queue coverage** – every block origin is handed out exactly once.
//! 4. **Zero-beta overwrite** – `alpha = 0, beta = 0` yields exact zeros.

use blockgemm::{GemmConfig, Transpose, WorkQueue, gemm_reference, gemm_with};
use proptest::prelude::*;
use std::collections::HashSet;

fn any_transpose() -> impl Strategy<Value = Transpose> {
    prop_oneof![
        Just(Transpose::NoTrans),
        Just(Transpose::Trans),
        Just(Transpose::ConjTrans),
    ]
}

/// Small integers keep every partial sum exact in f64.
fn matrix(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-8i32..=8).prop_map(f64::from), len)
}

#[derive(Debug, Clone)]
struct Case {
    ta: Transpose,
    tb: Transpose,
    m: usize,
    n: usize,
    k: usize,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
}

fn gemm_case() -> impl Strategy<Value = Case> {
    (any_transpose(), any_transpose(), 0usize..20, 0usize..20, 0usize..20).prop_flat_map(
        |(ta, tb, m, n, k)| {
            (matrix(m * k), matrix(k * n), matrix(m * n)).prop_map(move |(a, b, c)| Case {
                ta,
                tb,
                m,
                n,
                k,
                a,
                b,
                c,
            })
        },
    )
}

impl Case {
    fn lda(&self) -> usize {
        self.ta.stored_shape(self.m, self.k).1.max(1)
    }

    fn ldb(&self) -> usize {
        self.tb.stored_shape(self.k, self.n).1.max(1)
    }

    fn run(&self, config: &GemmConfig, alpha: f64, beta: f64) -> Vec<f64> {
        let mut c = self.c.clone();
        gemm_with(
            config,
            self.ta,
            self.tb,
            self.m,
            self.n,
            self.k,
            alpha,
            &self.a,
            self.lda(),
            &self.b,
            self.ldb(),
            beta,
            &mut c,
            self.n.max(1),
        )
        .unwrap();
        c
    }
}

proptest! {
    #[test]
    fn prop_matches_reference(
        case in gemm_case(),
        block_size in 1usize..9,
        alpha in (-3i32..=3).prop_map(f64::from),
        beta in (-3i32..=3).prop_map(f64::from),
    ) {
        let config = GemmConfig::new()
            .with_block_size(block_size)
            .with_min_parallel_blocks(1)
            .with_max_workers(3);
        let actual = case.run(&config, alpha, beta);

        let mut expected = case.c.clone();
        if case.m > 0 && case.n > 0 {
            gemm_reference(
                case.ta, case.tb, case.m, case.n, case.k, alpha,
                &case.a, case.lda(), &case.b, case.ldb(), beta,
                &mut expected, case.n,
            );
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_worker_count_does_not_change_bits(
        case in gemm_case(),
        workers in 1usize..8,
    ) {
        let serial = GemmConfig::new().with_block_size(4).serial();
        let parallel = GemmConfig::new()
            .with_block_size(4)
            .with_min_parallel_blocks(1)
            .with_max_workers(workers);

        let c_serial = case.run(&serial, 1.5, -0.5);
        let c_parallel = case.run(&parallel, 1.5, -0.5);
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&c_serial), bits(&c_parallel));
    }

    #[test]
    fn prop_queue_hands_out_each_block_once(
        m in 0usize..50,
        n in 0usize..50,
        block_size in 1usize..10,
    ) {
        let mut queue = WorkQueue::new(block_size);
        queue.reset(m, n);
        let got: Vec<_> = std::iter::from_fn(|| queue.next()).collect();

        prop_assert_eq!(got.len(), m.div_ceil(block_size) * n.div_ceil(block_size));
        let unique: HashSet<_> = got.iter().copied().collect();
        prop_assert_eq!(unique.len(), got.len());
        for (i, j) in got {
            prop_assert!(i < m && j < n);
            prop_assert_eq!(i % block_size, 0);
            prop_assert_eq!(j % block_size, 0);
        }
    }

    #[test]
    fn prop_zero_alpha_zero_beta_gives_exact_zeros(
        m in 1usize..12,
        n in 1usize..12,
        poison in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(-1.0e300)],
    ) {
        let a = vec![f64::NAN; m];
        let b = vec![f64::NAN; n];
        let mut c = vec![poison; m * n];
        gemm_with(
            &GemmConfig::new(), Transpose::NoTrans, Transpose::NoTrans,
            m, n, 1, 0.0, &a, 1, &b, n, 0.0, &mut c, n,
        ).unwrap();
        prop_assert!(c.iter().all(|&x| x == 0.0 && x.is_sign_positive()));
    }
}
