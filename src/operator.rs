use std::convert::Infallible;

/// A binary operation that combines two values of type `T` into one.
///
/// The operation can be anything from a sum to a min, max or concatenation.
/// For a batched reduction to produce the same result as a left fold it must be
/// associative: `combine(combine(a, b), c) == combine(a, combine(b, c))`.
/// This can not be checked at runtime, so it is up to the implementor.
///
/// Implementations are shared between all batches of a reduction, so they should
/// not carry mutable state.
pub trait BinaryOperator<T> {
    /// Error produced when two values can not be combined.
    /// Use [Infallible] for operations that always succeed.
    type Error;

    /// combine `a` and `b`, in that order
    fn combine(&self, a: T, b: T) -> Result<T, Self::Error>;
}

/// Any closure taking two values and returning one is an infallible operator
impl<T, F> BinaryOperator<T> for F
where
    F: Fn(T, T) -> T,
{
    type Error = Infallible;

    fn combine(&self, a: T, b: T) -> Result<T, Infallible> {
        Ok(self(a, b))
    }
}
