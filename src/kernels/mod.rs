//! Vector primitives for the inner loops of matrix multiplication.
//!
//! Every GEMM layout loop reduces to one of two operations on a row or a
//! strided column: a dot product or a scaled add (AXPY). These live on the
//! [`Element`] trait so an element type can swap in a faster version
//! without the blocked kernels knowing about it.
//!
//! - `level1`: portable loops, used by every element type
//! - `x86`: AVX2 + FMA versions for `f64`, picked at run time

pub mod level1;
#[cfg(target_arch = "x86_64")]
pub mod x86;

use num_complex::{Complex32, Complex64};
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul};

/// A numeric type the GEMM engine can multiply.
///
/// Implemented for `f32`, `f64`, `Complex32` and `Complex64`.
pub trait Element:
    Copy
    + Send
    + Sync
    + PartialEq
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + 'static
{
    /// Complex conjugate. The identity for real types.
    fn conj(self) -> Self;

    /// `sum(op(x[i]) * y[i])`, where `op` conjugates when `CONJ` is set.
    #[inline]
    fn dot_unitary<const CONJ: bool>(x: &[Self], y: &[Self]) -> Self {
        level1::dot_unitary::<Self, CONJ>(x, y)
    }

    /// `y[i] += alpha * x[i]` over two contiguous slices of equal length.
    #[inline]
    fn axpy_unitary(alpha: Self, x: &[Self], y: &mut [Self]) {
        level1::axpy_unitary(alpha, x, y)
    }

    /// `y[i * incy] += alpha * op(x[i * incx])` for `i in 0..n`.
    #[inline]
    fn axpy_inc<const CONJ: bool>(
        alpha: Self,
        x: &[Self],
        incx: usize,
        y: &mut [Self],
        incy: usize,
        n: usize,
    ) {
        level1::axpy_inc::<Self, CONJ>(alpha, x, incx, y, incy, n)
    }
}

impl Element for f32 {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

impl Element for f64 {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }

    #[inline]
    fn dot_unitary<const CONJ: bool>(x: &[f64], y: &[f64]) -> f64 {
        #[cfg(target_arch = "x86_64")]
        {
            if x86::has_avx2_fma() {
                return unsafe { x86::dot_unitary_avx2(x, y) };
            }
        }
        level1::dot_unitary::<f64, CONJ>(x, y)
    }

    #[inline]
    fn axpy_unitary(alpha: f64, x: &[f64], y: &mut [f64]) {
        #[cfg(target_arch = "x86_64")]
        {
            if x86::has_avx2_fma() {
                unsafe { x86::axpy_unitary_avx2(alpha, x, y) };
                return;
            }
        }
        level1::axpy_unitary(alpha, x, y)
    }
}

impl Element for Complex32 {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex32::conj(&self)
    }
}

impl Element for Complex64 {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex64::conj(&self)
    }
}
