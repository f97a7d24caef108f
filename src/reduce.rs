use crate::config::default_batch_size;
use crate::flip_buffer::FlipBuffer;
use crate::schedule::{plan, Plan};
use crate::{BinaryOperator, ReduceConfig, ReduceError, Strategy};
use std::num::NonZeroUsize;
use tracing::{debug, trace};

/// Serial reduction of every `step`-th element of `values`, starting at the first.
///
/// Computes `op(op(op(v[0], v[step]), v[2 * step]), ...)`. Returns `None` for an empty slice.
///
/// # Panics
///
/// if `step` is 0
pub fn fold_strided<T, O>(values: &[T], step: usize, op: &O) -> Result<Option<T>, O::Error>
where
    T: Clone,
    O: BinaryOperator<T>,
{
    let mut iter = values.iter().step_by(step);
    match iter.next() {
        Some(first) => iter
            .cloned()
            .try_fold(first.clone(), |acc, value| op.combine(acc, value))
            .map(Some),
        None => Ok(None),
    }
}

/// Reduces slices in multiple passes of independent batches.
///
/// The first pass folds contiguous batches of `batch_size` elements. Each following
/// pass folds the partial results of the previous pass, doubling the batch size,
/// until a single value remains. Every partial result covers a contiguous range of
/// the input, and ranges are always combined left to right, so any associative
/// operator gives the same result as a left fold.
///
/// Batches of a pass are run by the [Strategy]. Passes are strictly sequential.
#[derive(Debug, Clone)]
pub struct Reducer<S> {
    strategy: S,
    batch_size: NonZeroUsize,
}

impl<S: Strategy> Reducer<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            batch_size: default_batch_size(),
        }
    }

    pub fn with_config(strategy: S, config: &ReduceConfig) -> Self {
        Self::new(strategy).batch_size(config.batch_size)
    }

    /// Set the batch size of the first pass
    pub fn batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// The passes needed to reduce `len` elements
    pub fn plan(&self, len: usize) -> Plan {
        plan(len, self.batch_size)
    }

    /// Reduce `values` with `op`.
    ///
    /// `values` is never modified. Two scratch buffers of the same length as `values` are
    /// allocated for the duration of the call, and released on every exit path.
    ///
    /// Fails with [ReduceError::Empty] for an empty slice, [ReduceError::Allocation] if the
    /// scratch buffers can not be allocated, and [ReduceError::Operator] with the first
    /// error reported by `op`. No further pass is started once a batch failed.
    pub fn reduce<T, O>(&self, values: &[T], op: O) -> Result<T, ReduceError<O::Error>>
    where
        T: Clone + Send + Sync,
        O: BinaryOperator<T> + Sync,
        O::Error: Send,
    {
        let len = values.len();
        if len == 0 {
            return Err(ReduceError::Empty);
        }
        let plan = self.plan(len);
        debug!(
            len,
            passes = plan.len(),
            batch_size = self.batch_size.get(),
            "reducing"
        );
        let mut buffers = FlipBuffer::try_from_slice(values).map_err(|source| {
            debug!(len, "failed to allocate scratch buffers");
            ReduceError::Allocation { len, source }
        })?;
        for (index, pass) in plan.iter().enumerate() {
            buffers.flip();
            let (source, target) = buffers.split();
            trace!(
                index,
                step = pass.step,
                batch_size = pass.batch_size,
                batches = pass.batches(len),
                "starting pass"
            );
            let step = pass.step;
            self.strategy
                .for_each_batch(source, target, pass.batch_size, |input, output| {
                    fold_strided(input, step, &op).map(|folded| {
                        if let (Some(value), Some(slot)) = (folded, output.first_mut()) {
                            *slot = value;
                        }
                    })
                })
                .map_err(|err| {
                    debug!(index, step, "pass failed");
                    ReduceError::Operator(err)
                })?;
        }
        buffers
            .into_target()
            .into_iter()
            .next()
            .ok_or(ReduceError::Empty)
    }
}

/// Reduce `values` with `op`, using the default batch size
pub fn reduce<S, T, O>(strategy: &S, values: &[T], op: O) -> Result<T, ReduceError<O::Error>>
where
    S: Strategy,
    T: Clone + Send + Sync,
    O: BinaryOperator<T> + Sync,
    O::Error: Send,
{
    Reducer::new(strategy.clone()).reduce(values, op)
}
