//! Mutable rectangular windows into C.

use std::marker::PhantomData;

/// A `rows x cols` window into a row-major buffer with leading dimension `ld`.
///
/// Rows are handed out one at a time as plain slices, so two tiles that
/// cover disjoint elements never hold overlapping `&mut` slices even when
/// their rows interleave in memory. That is what lets workers write
/// neighbouring blocks of C concurrently.
pub struct Tile<'a, T> {
    ptr: *mut T,
    ld: usize,
    rows: usize,
    cols: usize,
    _marker: PhantomData<&'a mut [T]>,
}

/// Elements a `rows x cols` matrix with leading dimension `ld` spans, or
/// `None` if that count does not fit in a `usize`.
#[inline]
pub fn required_len(rows: usize, cols: usize, ld: usize) -> Option<usize> {
    if rows == 0 || cols == 0 {
        Some(0)
    } else {
        (rows - 1).checked_mul(ld)?.checked_add(cols)
    }
}

impl<'a, T> Tile<'a, T> {
    /// Window over the whole of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data` cannot hold a `rows x cols` matrix with stride `ld`.
    pub fn new(data: &'a mut [T], ld: usize, rows: usize, cols: usize) -> Self {
        assert!(rows <= 1 || ld >= cols, "tile stride {ld} < cols {cols}");
        assert!(
            required_len(rows, cols, ld).is_some_and(|n| data.len() >= n),
            "tile {rows}x{cols} (ld {ld}) does not fit in {} elements",
            data.len()
        );
        Self {
            ptr: data.as_mut_ptr(),
            ld,
            rows,
            cols,
            _marker: PhantomData,
        }
    }

    /// Builds a tile from a raw pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads and writes of a `rows x cols` matrix
    /// with stride `ld` for `'a`, and nothing else may access those
    /// elements while the tile is alive.
    pub(crate) unsafe fn from_raw_parts(ptr: *mut T, ld: usize, rows: usize, cols: usize) -> Self {
        Self {
            ptr,
            ld,
            rows,
            cols,
            _marker: PhantomData,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row `i` of the tile, `cols` elements long.
    #[inline]
    pub fn row(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.rows, "row {i} out of range for {} rows", self.rows);
        // SAFETY: the constructor guarantees the row lies inside the window
        // and `&mut self` keeps at most one row slice alive.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.add(i * self.ld), self.cols) }
    }

    /// Sub-window starting at `(i, j)`.
    pub fn sub(&mut self, i: usize, j: usize, rows: usize, cols: usize) -> Tile<'_, T> {
        assert!(i + rows <= self.rows && j + cols <= self.cols);
        if rows == 0 || cols == 0 {
            return Tile {
                ptr: self.ptr,
                ld: self.ld,
                rows,
                cols,
                _marker: PhantomData,
            };
        }
        // SAFETY: the sub-window is inside this window and borrows it mutably.
        unsafe { Tile::from_raw_parts(self.ptr.add(i * self.ld + j), self.ld, rows, cols) }
    }

    /// Applies `f` to every element of the window.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        for i in 0..self.rows {
            self.row(i).iter_mut().for_each(&mut f);
        }
    }
}
