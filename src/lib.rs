//! Parallel reduction of slices under an associative operator.
//!
//! Instead of a single serial scan, the input is reduced in passes. Each pass cuts the
//! current buffer into batches that are folded independently, possibly on different
//! threads, and writes one partial result per batch. The batch size doubles from pass
//! to pass until a single value remains. Two scratch buffers are allocated once per
//! reduction and swap roles between passes.
//!
//! ```
//! use batch_reduce::{ops::Sum, reduce, Sequential};
//!
//! let values: Vec<u64> = (0..1_000_000).collect();
//! assert_eq!(reduce(&Sequential, &values, Sum).unwrap(), 499_999_500_000);
//! ```
#![cfg_attr(batch_reduce_docsrs, feature(doc_cfg))]

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[cfg(test)]
#[macro_use]
mod test_macros;

mod config;
mod error;
mod flip_buffer;
mod operator;
mod reduce;
mod schedule;
mod strategy;

pub mod ops;

pub use config::*;
pub use error::*;
pub use operator::*;
pub use reduce::*;
pub use schedule::*;
pub use strategy::*;
