//! Unblocked layout loops: `C += alpha * op(A) * op(B)` on one tile.
//!
//! One loop per storage layout of the operands. The loop order is chosen so
//! the innermost operation is always a contiguous AXPY or dot product:
//!
//! | A      | B      | inner op                        |
//! |--------|--------|---------------------------------|
//! | N      | N      | row of B AXPY'd into row of C   |
//! | N      | T / C  | dot of row of A with row of B   |
//! | T / C  | N      | row of B AXPY'd into row of C   |
//! | T / C  | T / C  | column of B AXPY'd into row of C|
//!
//! Conjugation is a const parameter, so the nine transpose combinations
//! come out as nine monomorphic loops.
//!
//! In the AXPY-shaped loops a term whose scalar `alpha * op(A)[i, l]` is
//! exactly zero is skipped.

use super::tile::Tile;
use crate::kernels::Element;

#[inline(always)]
fn op<T: Element, const CONJ: bool>(v: T) -> T {
    if CONJ { v.conj() } else { v }
}

/// A is `m x k` (row stride `lda`), B is `k x n` (row stride `ldb`).
pub fn gemm_nn<T: Element>(
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    c: &mut Tile<'_, T>,
) {
    for i in 0..m {
        let c_row = c.row(i);
        for (l, &av) in a[i * lda..i * lda + k].iter().enumerate() {
            let tmp = alpha * av;
            if !tmp.is_zero() {
                T::axpy_unitary(tmp, &b[l * ldb..l * ldb + n], c_row);
            }
        }
    }
}

/// A is `m x k`, B is stored `n x k` and used as `op(B)`.
pub fn gemm_nt<T: Element, const CONJ_B: bool>(
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    c: &mut Tile<'_, T>,
) {
    for i in 0..m {
        let a_row = &a[i * lda..i * lda + k];
        let c_row = c.row(i);
        for (j, cv) in c_row.iter_mut().enumerate().take(n) {
            *cv += alpha * T::dot_unitary::<CONJ_B>(&b[j * ldb..j * ldb + k], a_row);
        }
    }
}

/// A is stored `k x m` and used as `op(A)`, B is `k x n`.
pub fn gemm_tn<T: Element, const CONJ_A: bool>(
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    c: &mut Tile<'_, T>,
) {
    for l in 0..k {
        let b_row = &b[l * ldb..l * ldb + n];
        for (i, &av) in a[l * lda..l * lda + m].iter().enumerate() {
            let tmp = alpha * op::<T, CONJ_A>(av);
            if !tmp.is_zero() {
                T::axpy_unitary(tmp, b_row, c.row(i));
            }
        }
    }
}

/// A is stored `k x m`, B is stored `n x k`, both used transposed.
pub fn gemm_tt<T: Element, const CONJ_A: bool, const CONJ_B: bool>(
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    b: &[T],
    ldb: usize,
    c: &mut Tile<'_, T>,
) {
    for l in 0..k {
        for (i, &av) in a[l * lda..l * lda + m].iter().enumerate() {
            let tmp = alpha * op::<T, CONJ_A>(av);
            if !tmp.is_zero() {
                T::axpy_inc::<CONJ_B>(tmp, &b[l..], ldb, c.row(i), 1, n);
            }
        }
    }
}
