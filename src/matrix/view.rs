//! Borrowed row-major matrix views.
//!
//! A view is `(data, rows, cols, stride)` over caller storage. It never
//! copies; [`MatMut`] is how [`multiply`](crate::multiply) writes C in place.

use crate::blocked::tile::required_len;
use crate::error::{GemmError, Result};

fn check_view(len: usize, rows: usize, cols: usize, stride: usize) -> Result<()> {
    let fits = required_len(rows, cols, stride).is_some_and(|n| len >= n);
    if stride < cols.max(1) || !fits {
        return Err(GemmError::InvalidView {
            rows,
            cols,
            stride,
            len,
        });
    }
    Ok(())
}

/// Read-only `rows x cols` view with row stride `stride`.
#[derive(Debug, Clone, Copy)]
pub struct MatRef<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T> MatRef<'a, T> {
    /// Fails unless `stride >= max(1, cols)` and `data` holds
    /// `(rows - 1) * stride + cols` elements.
    pub fn new(data: &'a [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_view(data.len(), rows, cols, stride)?;
        Ok(Self {
            data,
            rows,
            cols,
            stride,
        })
    }

    /// Densely packed view (`stride == cols`).
    pub fn from_slice(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, rows, cols, cols.max(1))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn get(&self, i: usize, j: usize) -> &T {
        assert!(i < self.rows && j < self.cols);
        &self.data[i * self.stride + j]
    }
}

/// Mutable `rows x cols` view with row stride `stride`.
#[derive(Debug)]
pub struct MatMut<'a, T> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    stride: usize,
}

impl<'a, T> MatMut<'a, T> {
    pub fn new(data: &'a mut [T], rows: usize, cols: usize, stride: usize) -> Result<Self> {
        check_view(data.len(), rows, cols, stride)?;
        Ok(Self {
            data,
            rows,
            cols,
            stride,
        })
    }

    pub fn from_slice(data: &'a mut [T], rows: usize, cols: usize) -> Result<Self> {
        Self::new(data, rows, cols, cols.max(1))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    pub fn get(&self, i: usize, j: usize) -> &T {
        assert!(i < self.rows && j < self.cols);
        &self.data[i * self.stride + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_view() {
        let data = [1, 2, 0, 3, 4];
        let view = MatRef::new(&data, 2, 2, 3).unwrap();
        assert_eq!(*view.get(1, 0), 3);
        assert_eq!(*view.get(1, 1), 4);
    }

    #[test]
    fn test_stride_below_cols_rejected() {
        let data = [0.0; 6];
        assert!(matches!(
            MatRef::new(&data, 2, 3, 2),
            Err(GemmError::InvalidView { .. })
        ));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let mut data = [0.0; 5];
        assert!(MatMut::new(&mut data, 2, 3, 3).is_err());
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let data = [0.0; 1];
        assert!(matches!(
            MatRef::new(&data, usize::MAX / 2 + 2, 1, 2),
            Err(GemmError::InvalidView { len: 1, .. })
        ));
    }

    #[test]
    fn test_empty_view() {
        let data: [f64; 0] = [];
        let view = MatRef::from_slice(&data, 0, 4).unwrap();
        assert_eq!(view.stride(), 4);
        assert!(MatRef::from_slice(&data, 3, 0).is_ok());
    }
}
