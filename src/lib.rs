#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! Blocked, multi-threaded general matrix multiply.
//!
//! Computes `C = alpha * op(A) * op(B) + beta * C` on row-major storage for
//! `f32`, `f64`, `Complex32` and `Complex64`, where `op` is identity,
//! transpose, or conjugate transpose.
//!
//! ## Usage
//!
//! ```
//! use blockgemm::{gemm, Transpose};
//!
//! let a = vec![1.0f64; 256 * 256];
//! let b = vec![1.0f64; 256 * 256];
//! let mut c = vec![0.0f64; 256 * 256];
//!
//! gemm(Transpose::NoTrans, Transpose::NoTrans, 256, 256, 256,
//!      1.0, &a, 256, &b, 256, 0.0, &mut c, 256).unwrap();
//! assert_eq!(c[0], 256.0);
//! ```
//!
//! With views, the shapes come from the operands:
//!
//! ```
//! use blockgemm::{multiply, MatMut, MatRef, Transpose};
//!
//! let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let b = [7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
//! let mut c = [0.0; 4];
//!
//! multiply(
//!     Transpose::NoTrans,
//!     Transpose::NoTrans,
//!     1.0,
//!     MatRef::from_slice(&a, 2, 3).unwrap(),
//!     MatRef::from_slice(&b, 3, 2).unwrap(),
//!     0.0,
//!     MatMut::from_slice(&mut c, 2, 2).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(c, [58.0, 64.0, 139.0, 154.0]);
//! ```
//!
//! ## What's inside
//!
//! - Exact BLAS quick returns: empty outputs, `alpha == 0`, `beta == 0`
//! - Output cut into fixed-size blocks, handed to scoped worker threads by
//!   a lock-free counter
//! - Nine monomorphic layout loops, one per transpose combination
//! - AVX2 + FMA vector primitives for `f64` when the CPU has them

pub mod blocked;
pub mod config;
pub mod driver;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod threaded;
pub mod transpose;

pub use config::GemmConfig;
pub use driver::{cgemm, dgemm, gemm, gemm_with, sgemm, zgemm};
pub use error::{GemmError, Operand, Result};
pub use kernels::Element;
pub use matrix::reference::gemm_reference;
pub use matrix::{MatMut, MatRef};
pub use threaded::WorkQueue;
pub use transpose::Transpose;

/// Matrix multiply on views: `C = alpha * op(A) * op(B) + beta * C`.
///
/// `m`, `n` and `k` are taken from the views.
///
/// # Errors
///
/// [`GemmError::DimensionMismatch`] if `op(A)`, `op(B)` and C do not form
/// a valid product.
pub fn multiply<T: Element>(
    trans_a: Transpose,
    trans_b: Transpose,
    alpha: T,
    a: MatRef<'_, T>,
    b: MatRef<'_, T>,
    beta: T,
    mut c: MatMut<'_, T>,
) -> Result<()> {
    let (m, k) = trans_a.stored_shape(a.rows(), a.cols());
    let (k_b, n) = trans_b.stored_shape(b.rows(), b.cols());
    if k != k_b {
        return Err(GemmError::DimensionMismatch(format!(
            "op(A) is {m}x{k} but op(B) is {k_b}x{n}"
        )));
    }
    if c.rows() != m || c.cols() != n {
        return Err(GemmError::DimensionMismatch(format!(
            "op(A) * op(B) is {m}x{n} but C is {}x{}",
            c.rows(),
            c.cols()
        )));
    }

    let ldc = c.stride();
    gemm(
        trans_a,
        trans_b,
        m,
        n,
        k,
        alpha,
        a.as_slice(),
        a.stride(),
        b.as_slice(),
        b.stride(),
        beta,
        c.as_mut_slice(),
        ldc,
    )
}
