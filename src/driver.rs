//! The GEMM driver: `C = alpha * op(A) * op(B) + beta * C`.
//!
//! All operands are row-major. A is `m x k` when `trans_a` is `NoTrans`
//! and stored `k x m` otherwise; B is `k x n` or stored `n x k`; C is
//! `m x n`. Each leading dimension must be at least the stored row length
//! (and at least 1).
//!
//! Steps, in order:
//!
//! 1. validate leading dimensions, then (for a non-empty output) buffer
//!    lengths; nothing is written to C if this fails
//! 2. quick returns: empty output, or `(alpha == 0 || k == 0) && beta == 1`
//! 3. scale C by beta: `beta == 0` overwrites with zero, so NaN/Inf in C
//!    do not survive
//! 4. stop here if `alpha == 0` or `k == 0`: A and B are never read
//! 5. run the blocked kernel serially, or on a scoped worker pool when
//!    there are enough blocks

use crate::blocked::BlockedKernel;
use crate::blocked::tile::{Tile, required_len};
use crate::config::GemmConfig;
use crate::error::{GemmError, Operand, Result};
use crate::kernels::Element;
use crate::threaded::{WorkQueue, blocks, run_parallel};
use crate::transpose::Transpose;
use log::debug;
use num_complex::{Complex32, Complex64};

/// General matrix multiply with the process-wide [`GemmConfig::global`].
///
/// ```
/// use blockgemm::{gemm, Transpose};
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2x3
/// let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0]; // 3x2
/// let mut c = [1.0; 4];
///
/// gemm(Transpose::NoTrans, Transpose::NoTrans, 2, 2, 3,
///      1.0, &a, 3, &b, 2, 2.0, &mut c, 2).unwrap();
/// assert_eq!(c, [60.0, 66.0, 141.0, 156.0]);
/// ```
pub fn gemm<T: Element>(
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
) -> Result<()> {
    gemm_with(
        GemmConfig::global(),
        trans_a,
        trans_b,
        m,
        n,
        k,
        alpha,
        a,
        lda,
        b,
        ldb,
        beta,
        c,
        ldc,
    )
}

/// General matrix multiply with an explicit configuration.
pub fn gemm_with<T: Element>(
    config: &GemmConfig,
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
) -> Result<()> {
    config.validate()?;

    let (a_rows, a_cols) = trans_a.stored_shape(m, k);
    let (b_rows, b_cols) = trans_b.stored_shape(k, n);
    check_ld(Operand::A, lda, a_cols)?;
    check_ld(Operand::B, ldb, b_cols)?;
    check_ld(Operand::C, ldc, n)?;

    if m == 0 || n == 0 {
        debug!("gemm {m}x{n}x{k}: empty output");
        return Ok(());
    }

    check_len(Operand::A, a.len(), a_rows, a_cols, lda)?;
    check_len(Operand::B, b.len(), b_rows, b_cols, ldb)?;
    check_len(Operand::C, c.len(), m, n, ldc)?;

    if (alpha.is_zero() || k == 0) && beta == T::one() {
        debug!("gemm {m}x{n}x{k}: C unchanged");
        return Ok(());
    }

    scale(beta, &mut Tile::new(c, ldc, m, n));

    if alpha.is_zero() || k == 0 {
        debug!("gemm {m}x{n}x{k}: beta scaling only");
        return Ok(());
    }

    let block_size = config.block_size();
    let kernel = BlockedKernel {
        trans_a,
        trans_b,
        m,
        n,
        k,
        alpha,
        a,
        lda,
        b,
        ldb,
        block_size,
    };

    let total = blocks(m, block_size) * blocks(n, block_size);
    let workers = config.workers_for(total);
    if total < config.min_parallel_blocks() || workers == 1 {
        debug!("gemm {m}x{n}x{k} ({trans_a}{trans_b}): serial, {total} blocks");
        kernel.run_serial(&mut Tile::new(c, ldc, m, n));
    } else {
        debug!("gemm {m}x{n}x{k} ({trans_a}{trans_b}): {workers} workers, {total} blocks");
        let mut queue = WorkQueue::new(block_size);
        queue.reset(m, n);
        run_parallel(&kernel, c, ldc, &queue, workers);
    }
    Ok(())
}

fn check_ld(operand: Operand, ld: usize, cols: usize) -> Result<()> {
    let min = cols.max(1);
    if ld < min {
        return Err(GemmError::LeadingDimension { operand, ld, min });
    }
    Ok(())
}

fn check_len(operand: Operand, len: usize, rows: usize, cols: usize, ld: usize) -> Result<()> {
    match required_len(rows, cols, ld) {
        Some(required) if len >= required => Ok(()),
        required => Err(GemmError::ShortBuffer {
            operand,
            len,
            required: required.unwrap_or(usize::MAX),
        }),
    }
}

/// `C *= beta`, with `beta == 0` writing exact zeros.
fn scale<T: Element>(beta: T, c: &mut Tile<'_, T>) {
    if beta.is_zero() {
        c.for_each_mut(|x| *x = T::zero());
    } else if beta != T::one() {
        c.for_each_mut(|x| *x = beta * *x);
    }
}

macro_rules! typed_gemm {
    ($(#[$doc:meta])* $name:ident, $t:ty) => {
        $(#[$doc])*
        pub fn $name(
            trans_a: Transpose,
            trans_b: Transpose,
            m: usize,
            n: usize,
            k: usize,
            alpha: $t,
            a: &[$t],
            lda: usize,
            b: &[$t],
            ldb: usize,
            beta: $t,
            c: &mut [$t],
            ldc: usize,
        ) -> Result<()> {
            gemm(trans_a, trans_b, m, n, k, alpha, a, lda, b, ldb, beta, c, ldc)
        }
    };
}

typed_gemm!(
    /// Single-precision [`gemm`].
    sgemm, f32
);
typed_gemm!(
    /// Double-precision [`gemm`].
    dgemm, f64
);
typed_gemm!(
    /// Single-precision complex [`gemm`].
    cgemm, Complex32
);
typed_gemm!(
    /// Double-precision complex [`gemm`].
    zgemm, Complex64
);
