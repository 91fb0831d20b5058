//! AVX2 + FMA versions of the `f64` vector primitives.
//!
//! Four lanes per iteration, FMA for the multiply-accumulate, scalar
//! `mul_add` for the tail so every element sees a fused operation.

use std::arch::x86_64::*;

/// Whether the running CPU can execute the functions in this module.
#[inline]
pub fn has_avx2_fma() -> bool {
    is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
}

/// `y[i] += alpha * x[i]`.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2 and FMA.
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn axpy_unitary_avx2(alpha: f64, x: &[f64], y: &mut [f64]) {
    let n = x.len().min(y.len());
    let n_main = (n / 4) * 4;
    let a = _mm256_set1_pd(alpha);

    let xp = x.as_ptr();
    let yp = y.as_mut_ptr();
    for i in (0..n_main).step_by(4) {
        let xv = _mm256_loadu_pd(xp.add(i));
        let yv = _mm256_loadu_pd(yp.add(i));
        _mm256_storeu_pd(yp.add(i), _mm256_fmadd_pd(a, xv, yv));
    }

    for i in n_main..n {
        y[i] = alpha.mul_add(x[i], y[i]);
    }
}

/// `sum(x[i] * y[i])`.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2 and FMA.
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn dot_unitary_avx2(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    let n_main = (n / 4) * 4;

    let xp = x.as_ptr();
    let yp = y.as_ptr();
    let mut acc = _mm256_setzero_pd();
    for i in (0..n_main).step_by(4) {
        let xv = _mm256_loadu_pd(xp.add(i));
        let yv = _mm256_loadu_pd(yp.add(i));
        acc = _mm256_fmadd_pd(xv, yv, acc);
    }

    let mut lanes = [0.0f64; 4];
    _mm256_storeu_pd(lanes.as_mut_ptr(), acc);
    let mut sum = (lanes[0] + lanes[1]) + (lanes[2] + lanes[3]);
    for i in n_main..n {
        sum = x[i].mul_add(y[i], sum);
    }
    sum
}
