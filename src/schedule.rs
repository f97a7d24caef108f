use smallvec::SmallVec;
use std::num::NonZeroUsize;

/// One sweep over the current source buffer.
///
/// The buffer is cut into batches of `batch_size` elements. Each batch is folded
/// at a stride of `step`, and the result is written to the first slot of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pass {
    pub step: usize,
    pub batch_size: usize,
}

impl Pass {
    /// number of batches for a buffer of length `len`
    pub fn batches(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            (len - 1) / self.batch_size + 1
        }
    }
}

/// All passes of a reduction. Even for huge inputs this is a few dozen passes at most.
pub type Plan = SmallVec<[Pass; 16]>;

/// The sequence of passes needed to reduce `len` elements.
///
/// The first pass folds contiguous runs of `batch_size` elements. Every following pass
/// combines the results of the previous one at a stride of the previous batch size,
/// with the batch size doubling each time, until the stride covers the whole input.
#[derive(Debug, Clone)]
pub struct Schedule {
    len: usize,
    step: usize,
    batch_size: usize,
}

impl Schedule {
    pub fn new(len: usize, batch_size: NonZeroUsize) -> Self {
        Self {
            len,
            step: 1,
            batch_size: batch_size.get(),
        }
    }
}

impl Iterator for Schedule {
    type Item = Pass;

    fn next(&mut self) -> Option<Pass> {
        if self.step >= self.len {
            return None;
        }
        let pass = Pass {
            step: self.step,
            batch_size: self.batch_size,
        };
        self.step = self.batch_size;
        self.batch_size = self.batch_size.saturating_mul(2);
        Some(pass)
    }
}

/// Plan the reduction of `len` elements with the given initial batch size
pub fn plan(len: usize, batch_size: NonZeroUsize) -> Plan {
    Schedule::new(len, batch_size).collect()
}
