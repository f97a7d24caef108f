//! Execution strategies for the batches of a single pass.
//!
//! A [Strategy] gets a source and a target buffer of the same length, cuts both into
//! batches and calls a function for each pair of input and output batch. All batches
//! of a pass are independent of each other. The call returns only when every batch
//! has completed, which is the barrier between two passes.
#[cfg(feature = "parallel")]
use crate::{ConfigError, ReduceConfig};
#[cfg(feature = "parallel")]
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
    ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder,
};
use std::fmt;
#[cfg(feature = "parallel")]
use std::sync::Arc;

/// A strategy for executing the batches of a pass.
pub trait Strategy: Clone + Send + Sync + fmt::Debug {
    /// Calls `f(input, output)` for each batch of `batch_size` elements of `source`
    /// and the corresponding batch of `target`. The last batch may be shorter.
    ///
    /// If `f` fails, batches that have not been started are skipped and one of the
    /// errors is returned.
    fn for_each_batch<T, E, F>(
        &self,
        source: &[T],
        target: &mut [T],
        batch_size: usize,
        f: F,
    ) -> Result<(), E>
    where
        T: Send + Sync,
        E: Send,
        F: Fn(&[T], &mut [T]) -> Result<(), E> + Send + Sync;
}

/// Runs all batches in order on the calling thread.
///
/// Useful for small inputs, for debugging, and as a baseline for the [Parallel] strategy.
#[derive(Default, Debug, Clone)]
pub struct Sequential;

impl Strategy for Sequential {
    fn for_each_batch<T, E, F>(
        &self,
        source: &[T],
        target: &mut [T],
        batch_size: usize,
        f: F,
    ) -> Result<(), E>
    where
        T: Send + Sync,
        E: Send,
        F: Fn(&[T], &mut [T]) -> Result<(), E> + Send + Sync,
    {
        debug_assert_eq!(source.len(), target.len());
        for (input, output) in source.chunks(batch_size).zip(target.chunks_mut(batch_size)) {
            f(input, output)?;
        }
        Ok(())
    }
}

/// Runs the batches of a pass on a rayon thread pool.
///
/// `Parallel` holds an [`Arc<ThreadPool>`], so it can be cheaply cloned and shared
/// between threads and concurrent reductions.
#[cfg(feature = "parallel")]
#[cfg_attr(batch_reduce_docsrs, doc(cfg(feature = "parallel")))]
#[derive(Debug, Clone)]
pub struct Parallel {
    thread_pool: Arc<ThreadPool>,
}

#[cfg(feature = "parallel")]
impl Parallel {
    /// Creates a new strategy running on the given pool
    pub fn new(thread_pool: Arc<ThreadPool>) -> Self {
        Self { thread_pool }
    }

    /// Creates a new strategy with its own pool of `num_threads` threads.
    /// Zero threads means rayon picks the number of threads.
    pub fn with_threads(num_threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("batch-reduce-{}", i))
            .build()?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn from_config(config: &ReduceConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_threads(config.num_threads.unwrap_or(0))?)
    }

    /// Number of threads of the underlying pool
    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }
}

#[cfg(feature = "parallel")]
impl From<Arc<ThreadPool>> for Parallel {
    fn from(thread_pool: Arc<ThreadPool>) -> Self {
        Self::new(thread_pool)
    }
}

#[cfg(feature = "parallel")]
impl Strategy for Parallel {
    fn for_each_batch<T, E, F>(
        &self,
        source: &[T],
        target: &mut [T],
        batch_size: usize,
        f: F,
    ) -> Result<(), E>
    where
        T: Send + Sync,
        E: Send,
        F: Fn(&[T], &mut [T]) -> Result<(), E> + Send + Sync,
    {
        debug_assert_eq!(source.len(), target.len());
        self.thread_pool.install(|| {
            source
                .par_chunks(batch_size)
                .zip(target.par_chunks_mut(batch_size))
                .try_for_each(|(input, output)| f(input, output))
        })
    }
}
