use std::collections::TryReserveError;
use std::fmt::Debug;

/// A pair of equally sized buffers that are logically divided into a source and a target.
///
/// Flipping swaps the roles of the two buffers without touching their content, so
/// what has just been written to the target can be read as the source of the next step.
pub(crate) struct FlipBuffer<T> {
    /// the two buffers, always of the same length
    buffers: [Vec<T>; 2],
    /// index of the target buffer, the other one is the source
    target: usize,
}

impl<T: Debug> Debug for FlipBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FlipBuffer({:?},{:?})",
            self.source_slice(),
            self.target_slice()
        )
    }
}

impl<T> FlipBuffer<T> {
    /// Creates a flip buffer from a source and a target buffer of the same length
    pub(crate) fn new(source: Vec<T>, target: Vec<T>) -> Self {
        assert_eq!(
            source.len(),
            target.len(),
            "source and target must have the same length"
        );
        FlipBuffer {
            buffers: [source, target],
            target: 1,
        }
    }

    /// Swap the roles of source and target. This is O(1) and never moves elements.
    pub(crate) fn flip(&mut self) {
        self.target ^= 1;
    }

    /// The current source as a slice
    pub(crate) fn source_slice(&self) -> &[T] {
        &self.buffers[self.target ^ 1]
    }

    /// The current target as a slice
    pub(crate) fn target_slice(&self) -> &[T] {
        &self.buffers[self.target]
    }

    /// Borrow the source for reading and the target for writing at the same time
    pub(crate) fn split(&mut self) -> (&[T], &mut [T]) {
        let [a, b] = &mut self.buffers;
        if self.target == 0 {
            (&b[..], &mut a[..])
        } else {
            (&a[..], &mut b[..])
        }
    }

    /// takes the target as a vec and drops the source
    pub(crate) fn into_target(self) -> Vec<T> {
        let FlipBuffer {
            buffers: [a, b],
            target,
        } = self;
        if target == 0 {
            a
        } else {
            b
        }
    }
}

impl<T: Clone> FlipBuffer<T> {
    /// Allocates both buffers for `values` and fills them with copies of it.
    ///
    /// The target holds the values, the source is scratch space.
    /// Fails without running out of memory if either allocation is not possible.
    /// A buffer that was already allocated is released again in that case.
    ///
    /// The source only ever holds values that are overwritten before they are read, but
    /// every slot of a `Vec<T>` must be initialized, so it is filled with copies as well.
    /// For types that are expensive to clone this doubles the setup cost of a reduction.
    pub(crate) fn try_from_slice(values: &[T]) -> Result<Self, TryReserveError> {
        let target = try_copy(values)?;
        let source = try_copy(values)?;
        Ok(Self::new(source, target))
    }
}

fn try_copy<T: Clone>(values: &[T]) -> Result<Vec<T>, TryReserveError> {
    let mut res = Vec::new();
    res.try_reserve_exact(values.len())?;
    res.extend_from_slice(values);
    Ok(res)
}
