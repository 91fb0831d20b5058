//! Unblocked reference GEMM.

use crate::kernels::Element;
use crate::transpose::Transpose;

#[inline(always)]
fn load<T: Element>(t: Transpose, data: &[T], ld: usize, row: usize, col: usize) -> T {
    match t {
        Transpose::NoTrans => data[row * ld + col],
        Transpose::Trans => data[col * ld + row],
        Transpose::ConjTrans => data[col * ld + row].conj(),
    }
}

/// Reference GEMM: the textbook triple loop.
///
/// Computes `C = alpha * op(A) * op(B) + beta * C` one output element at a
/// time with no blocking, no threading and no zero skipping. With
/// `beta == 0` the old value of C is ignored rather than multiplied.
///
/// Slow on purpose. Use it as a correctness baseline.
///
/// # Arguments
///
/// * `a` - stored `m x k` (`NoTrans`) or `k x m`, row stride `lda`
/// * `b` - stored `k x n` (`NoTrans`) or `n x k`, row stride `ldb`
/// * `c` - `m x n`, row stride `ldc`, overwritten
pub fn gemm_reference<T: Element>(
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
) {
    for i in 0..m {
        for j in 0..n {
            let mut acc = T::zero();
            for p in 0..k {
                acc += load(trans_a, a, lda, i, p) * load(trans_b, b, ldb, p, j);
            }
            let idx = i * ldc + j;
            c[idx] = if beta.is_zero() {
                alpha * acc
            } else {
                alpha * acc + beta * c[idx]
            };
        }
    }
}
