//! Scoped worker pool that drains a [`WorkQueue`].

use super::queue::WorkQueue;
use crate::blocked::BlockedKernel;
use crate::blocked::tile::{Tile, required_len};
use crate::kernels::Element;
use log::trace;
use std::marker::PhantomData;
use std::thread;

/// C shared between workers.
///
/// Workers only ever build tiles for blocks they claimed from the queue,
/// and claimed blocks never overlap.
struct SharedOutput<'a, T> {
    ptr: *mut T,
    len: usize,
    ld: usize,
    _marker: PhantomData<&'a mut [T]>,
}

unsafe impl<T: Send> Send for SharedOutput<'_, T> {}
unsafe impl<T: Send> Sync for SharedOutput<'_, T> {}

impl<'a, T> SharedOutput<'a, T> {
    fn new(data: &'a mut [T], ld: usize) -> Self {
        Self {
            ptr: data.as_mut_ptr(),
            len: data.len(),
            ld,
            _marker: PhantomData,
        }
    }

    /// Tile for the block at `(i, j)`.
    ///
    /// # Safety
    ///
    /// No other live tile may overlap this block.
    unsafe fn block(&self, i: usize, j: usize, rows: usize, cols: usize) -> Tile<'_, T> {
        let offset = i * self.ld + j;
        let end = required_len(rows, cols, self.ld).and_then(|n| n.checked_add(offset));
        assert!(end.is_some_and(|end| end <= self.len));
        unsafe { Tile::from_raw_parts(self.ptr.add(offset), self.ld, rows, cols) }
    }
}

/// Runs `kernel` over every block of an `m x n` output using `workers`
/// scoped threads pulling from `queue`.
///
/// Returns once every worker has exited. A panic in any worker is
/// re-raised here after the rest have been joined.
pub fn run_parallel<T: Element>(
    kernel: &BlockedKernel<'_, T>,
    c: &mut [T],
    ldc: usize,
    queue: &WorkQueue,
    workers: usize,
) {
    let shared = SharedOutput::new(c, ldc);
    let shared = &shared;

    thread::scope(|s| {
        for worker in 0..workers {
            s.spawn(move || {
                let mut claimed = 0usize;
                while let Some((i, j)) = queue.next() {
                    let (rows, cols) = kernel.extent(i, j);
                    // SAFETY: the queue hands out each block exactly once.
                    let mut tile = unsafe { shared.block(i, j, rows, cols) };
                    kernel.run_block(i, j, &mut tile);
                    claimed += 1;
                }
                trace!("worker {worker} done after {claimed} blocks");
            });
        }
    });
}
