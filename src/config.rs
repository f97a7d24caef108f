use crate::ConfigError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// The number of elements reduced by one batch of the first pass
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Tunables of a reduction. None of them affect the result, only the performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ReduceConfig {
    /// Batch size of the first pass. Larger batches mean fewer, longer tasks.
    pub batch_size: NonZeroUsize,
    /// Number of worker threads for a dedicated pool. `None` lets rayon decide.
    pub num_threads: Option<usize>,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            num_threads: None,
        }
    }
}

impl ReduceConfig {
    pub fn with_batch_size(self, batch_size: usize) -> Result<Self, ConfigError> {
        let batch_size = NonZeroUsize::new(batch_size).ok_or(ConfigError::ZeroBatchSize)?;
        Ok(Self { batch_size, ..self })
    }

    pub fn with_num_threads(self, num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
            ..self
        }
    }
}

pub(crate) fn default_batch_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN)
}
