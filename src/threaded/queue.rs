//! Lock-free hand-out of output blocks.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out the block origins of an `m x n` output, each exactly once.
///
/// The only shared state is `head`, claimed with a single `fetch_add`.
/// Blocks come out in row-major block order: `(0, 0)`, `(0, bs)`, ...,
/// `(bs, 0)`, ...
#[derive(Debug)]
pub struct WorkQueue {
    head: AtomicUsize,
    total: usize,
    blocks_per_row: usize,
    block_size: usize,
}

/// Number of `block_size` chunks needed to cover `len`.
#[inline]
pub fn blocks(len: usize, block_size: usize) -> usize {
    len.div_ceil(block_size)
}

impl WorkQueue {
    /// Creates an exhausted queue. Call [`reset`](Self::reset) before use.
    ///
    /// # Panics
    ///
    /// Panics if `block_size` is zero.
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "block size must be positive");
        Self {
            head: AtomicUsize::new(0),
            total: 0,
            blocks_per_row: 0,
            block_size,
        }
    }

    /// Prepares the queue for an `m x n` output.
    ///
    /// Takes `&mut self`, so it can never race with [`next`](Self::next).
    pub fn reset(&mut self, m: usize, n: usize) {
        self.blocks_per_row = blocks(n, self.block_size);
        self.total = blocks(m, self.block_size) * self.blocks_per_row;
        *self.head.get_mut() = 0;
    }

    /// Claims the next block origin `(i, j)`, or `None` once every block
    /// has been handed out.
    #[inline]
    pub fn next(&self) -> Option<(usize, usize)> {
        let w = self.head.fetch_add(1, Ordering::Relaxed);
        if w >= self.total {
            return None;
        }
        let i = (w / self.blocks_per_row) * self.block_size;
        let j = (w % self.blocks_per_row) * self.block_size;
        Some((i, j))
    }

    /// Total number of blocks for the current shape.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}
