//! Parallel execution of the blocked kernel.
//!
//! A [`WorkQueue`] hands out output blocks with one atomic counter; a
//! pool of scoped threads, created per call, drains it. No worker ever
//! waits on another: blocks never share output elements.
//!
//! - `queue`: block hand-out
//! - `pool`: scoped workers over a shared C

pub mod pool;
pub mod queue;

pub use pool::run_parallel;
pub use queue::{WorkQueue, blocks};
