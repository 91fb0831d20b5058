//! Engine configuration: block size, parallel cutoff, worker limit.
//!
//! The block size is fixed for the duration of a call. Defaults can be
//! overridden from the environment:
//!
//! - `BLOCKGEMM_NUM_THREADS`: maximum worker count (`1` forces serial)
//! - `BLOCKGEMM_BLOCK_SIZE`: edge length of an output block

use crate::error::{GemmError, Result};
use log::warn;
use std::num::NonZeroUsize;
use std::sync::OnceLock;

/// Default edge length of an output block.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Below this many output blocks the driver stays on the calling thread.
pub const DEFAULT_MIN_PARALLEL_BLOCKS: usize = 4;

pub const NUM_THREADS_ENV: &str = "BLOCKGEMM_NUM_THREADS";
pub const BLOCK_SIZE_ENV: &str = "BLOCKGEMM_BLOCK_SIZE";

/// Tuning knobs for the GEMM driver.
///
/// ```
/// use blockgemm::GemmConfig;
///
/// let config = GemmConfig::new().with_block_size(32).with_max_workers(2);
/// assert_eq!(config.block_size(), 32);
/// assert_eq!(config.workers_for(10), 2);
/// assert_eq!(config.workers_for(1), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GemmConfig {
    block_size: usize,
    min_parallel_blocks: usize,
    max_workers: Option<NonZeroUsize>,
}

impl Default for GemmConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            min_parallel_blocks: DEFAULT_MIN_PARALLEL_BLOCKS,
            max_workers: None,
        }
    }
}

impl GemmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide configuration used by [`gemm`](crate::gemm): defaults
    /// plus environment overrides, read once.
    pub fn global() -> &'static GemmConfig {
        static GLOBAL: OnceLock<GemmConfig> = OnceLock::new();
        GLOBAL.get_or_init(GemmConfig::from_env)
    }

    /// Defaults overridden by `BLOCKGEMM_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    /// Values that are not positive integers are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(workers) = parse_positive(&lookup, NUM_THREADS_ENV) {
            config = config.with_max_workers(workers);
        }
        if let Some(block_size) = parse_positive(&lookup, BLOCK_SIZE_ENV) {
            config = config.with_block_size(block_size);
        }
        config
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_min_parallel_blocks(mut self, blocks: usize) -> Self {
        self.min_parallel_blocks = blocks;
        self
    }

    /// Caps the worker count. Zero means "use available parallelism".
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = NonZeroUsize::new(workers);
        self
    }

    /// Forces single-threaded execution.
    pub fn serial(self) -> Self {
        self.with_max_workers(1)
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn min_parallel_blocks(&self) -> usize {
        self.min_parallel_blocks
    }

    /// Upper bound on workers: the configured cap, or the machine's
    /// available parallelism.
    pub fn max_workers(&self) -> usize {
        match self.max_workers {
            Some(n) => n.get(),
            None => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }

    /// Workers to launch for `blocks` output blocks: never more than there
    /// are blocks, never fewer than one.
    pub fn workers_for(&self, blocks: usize) -> usize {
        self.max_workers().min(blocks).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(GemmError::InvalidConfig(
                "block size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_positive(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<usize> {
    let raw = lookup(key)?;
    match raw.trim().parse::<usize>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            warn!("ignoring {key}={raw:?}: expected a positive integer");
            None
        }
    }
}
