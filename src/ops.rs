//! Common operators for reductions
use crate::BinaryOperator;
use num_traits::{CheckedAdd, CheckedMul, WrappingAdd, WrappingMul};
use std::convert::Infallible;
use thiserror::Error;

/// Addition, wrapping around on overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

/// Multiplication, wrapping around on overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct Product;

/// The smaller of two values. On ties the first value wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// The larger of two values. On ties the second value wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

/// Addition that fails with [Overflow] instead of wrapping
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedSum;

/// Multiplication that fails with [Overflow] instead of wrapping
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedProduct;

/// The result of a checked operation is not representable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arithmetic overflow")]
pub struct Overflow;

impl<T: WrappingAdd> BinaryOperator<T> for Sum {
    type Error = Infallible;

    fn combine(&self, a: T, b: T) -> Result<T, Infallible> {
        Ok(a.wrapping_add(&b))
    }
}

impl<T: WrappingMul> BinaryOperator<T> for Product {
    type Error = Infallible;

    fn combine(&self, a: T, b: T) -> Result<T, Infallible> {
        Ok(a.wrapping_mul(&b))
    }
}

impl<T: Ord> BinaryOperator<T> for Min {
    type Error = Infallible;

    fn combine(&self, a: T, b: T) -> Result<T, Infallible> {
        Ok(std::cmp::min(a, b))
    }
}

impl<T: Ord> BinaryOperator<T> for Max {
    type Error = Infallible;

    fn combine(&self, a: T, b: T) -> Result<T, Infallible> {
        Ok(std::cmp::max(a, b))
    }
}

impl<T: CheckedAdd> BinaryOperator<T> for CheckedSum {
    type Error = Overflow;

    fn combine(&self, a: T, b: T) -> Result<T, Overflow> {
        a.checked_add(&b).ok_or(Overflow)
    }
}

impl<T: CheckedMul> BinaryOperator<T> for CheckedProduct {
    type Error = Overflow;

    fn combine(&self, a: T, b: T) -> Result<T, Overflow> {
        a.checked_mul(&b).ok_or(Overflow)
    }
}
