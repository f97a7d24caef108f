use std::collections::TryReserveError;
use std::convert::Infallible;
use thiserror::Error;

/// Errors that can occur during a reduction.
///
/// `E` is the error type of the operator, [Infallible] for operators that can not fail.
#[derive(Debug, Error)]
pub enum ReduceError<E = Infallible> {
    /// There is nothing to reduce
    #[error("cannot reduce an empty sequence")]
    Empty,
    /// The scratch buffers could not be allocated
    #[error("failed to allocate scratch buffers for {len} elements")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    /// The operator failed to combine two values
    #[error("operator failed: {0}")]
    Operator(#[source] E),
}

/// Errors in the configuration of a reduction
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
