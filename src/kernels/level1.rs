//! Portable dot and AXPY loops.
//!
//! These are the fallback for every element type and the only path for
//! `f32` and the complex types.

use super::Element;

#[inline(always)]
fn op<T: Element, const CONJ: bool>(v: T) -> T {
    if CONJ { v.conj() } else { v }
}

/// `sum(op(x[i]) * y[i])` over the common length of `x` and `y`.
#[inline]
pub fn dot_unitary<T: Element, const CONJ: bool>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    let mut sum = T::zero();
    for (&xv, &yv) in x.iter().zip(y) {
        sum += op::<T, CONJ>(xv) * yv;
    }
    sum
}

/// `y[i] += alpha * x[i]`.
#[inline]
pub fn axpy_unitary<T: Element>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    for (yv, &xv) in y.iter_mut().zip(x) {
        *yv += alpha * xv;
    }
}

/// `y[i * incy] += alpha * op(x[i * incx])` for `i in 0..n`.
///
/// # Panics
///
/// Panics if either slice is too short for `n` strided elements.
#[inline]
pub fn axpy_inc<T: Element, const CONJ: bool>(
    alpha: T,
    x: &[T],
    incx: usize,
    y: &mut [T],
    incy: usize,
    n: usize,
) {
    let mut ix = 0;
    let mut iy = 0;
    for _ in 0..n {
        y[iy] += alpha * op::<T, CONJ>(x[ix]);
        ix += incx;
        iy += incy;
    }
}
