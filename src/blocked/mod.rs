//! Blocked multiply kernel.
//!
//! The output matrix is cut into `block_size x block_size` blocks. For one
//! block the kernel walks the reduction dimension in chunks of the same
//! size and runs the matching layout loop from [`serial`] on each chunk,
//! only ever adding into C. Scaling C by beta happens once, before any
//! block runs, in the driver.
//!
//! - `serial`: the four layout loops (nine with conjugation)
//! - `tile`: mutable windows into C

pub mod serial;
pub mod tile;

use crate::kernels::Element;
use crate::transpose::Transpose;
use tile::Tile;

/// Read-only arguments shared by every block of one GEMM call.
#[derive(Debug, Clone, Copy)]
pub struct BlockedKernel<'a, T> {
    pub trans_a: Transpose,
    pub trans_b: Transpose,
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub alpha: T,
    pub a: &'a [T],
    pub lda: usize,
    pub b: &'a [T],
    pub ldb: usize,
    pub block_size: usize,
}

impl<T: Element> BlockedKernel<'_, T> {
    /// Extent of the block whose top-left corner is `(i, j)`.
    #[inline]
    pub fn extent(&self, i: usize, j: usize) -> (usize, usize) {
        (
            self.block_size.min(self.m - i),
            self.block_size.min(self.n - j),
        )
    }

    /// Adds `alpha * op(A) * op(B)` restricted to rows `i..i+rows` and
    /// columns `j..j+cols` into `c`, a tile of exactly that shape.
    pub fn run_block(&self, i: usize, j: usize, c: &mut Tile<'_, T>) {
        let (rows, cols) = (c.rows(), c.cols());
        debug_assert_eq!((rows, cols), self.extent(i, j));
        if rows == 0 || cols == 0 {
            return;
        }

        let (lda, ldb) = (self.lda, self.ldb);
        for l in (0..self.k).step_by(self.block_size) {
            let len_k = self.block_size.min(self.k - l);
            let a = if self.trans_a.is_trans() {
                &self.a[l * lda + i..]
            } else {
                &self.a[i * lda + l..]
            };
            let b = if self.trans_b.is_trans() {
                &self.b[j * ldb + l..]
            } else {
                &self.b[l * ldb + j..]
            };
            self.dispatch(rows, cols, len_k, a, b, c);
        }
    }

    /// Runs every block of the output in row-major block order on the
    /// calling thread.
    pub fn run_serial(&self, c: &mut Tile<'_, T>) {
        for i in (0..self.m).step_by(self.block_size) {
            for j in (0..self.n).step_by(self.block_size) {
                let (rows, cols) = self.extent(i, j);
                self.run_block(i, j, &mut c.sub(i, j, rows, cols));
            }
        }
    }

    #[inline]
    fn dispatch(&self, m: usize, n: usize, k: usize, a: &[T], b: &[T], c: &mut Tile<'_, T>) {
        use Transpose::*;

        let (alpha, lda, ldb) = (self.alpha, self.lda, self.ldb);
        match (self.trans_a, self.trans_b) {
            (NoTrans, NoTrans) => serial::gemm_nn(m, n, k, alpha, a, lda, b, ldb, c),
            (NoTrans, Trans) => serial::gemm_nt::<T, false>(m, n, k, alpha, a, lda, b, ldb, c),
            (NoTrans, ConjTrans) => serial::gemm_nt::<T, true>(m, n, k, alpha, a, lda, b, ldb, c),
            (Trans, NoTrans) => serial::gemm_tn::<T, false>(m, n, k, alpha, a, lda, b, ldb, c),
            (ConjTrans, NoTrans) => serial::gemm_tn::<T, true>(m, n, k, alpha, a, lda, b, ldb, c),
            (Trans, Trans) => {
                serial::gemm_tt::<T, false, false>(m, n, k, alpha, a, lda, b, ldb, c)
            }
            (Trans, ConjTrans) => {
                serial::gemm_tt::<T, false, true>(m, n, k, alpha, a, lda, b, ldb, c)
            }
            (ConjTrans, Trans) => {
                serial::gemm_tt::<T, true, false>(m, n, k, alpha, a, lda, b, ldb, c)
            }
            (ConjTrans, ConjTrans) => {
                serial::gemm_tt::<T, true, true>(m, n, k, alpha, a, lda, b, ldb, c)
            }
        }
    }
}
