#[cfg(feature = "parallel")]
lazy_static::lazy_static! {
    static ref POOL: crate::Parallel =
        crate::Parallel::with_threads(4).expect("failed to build test pool");
}

/// a parallel strategy on a pool shared by all tests
#[cfg(feature = "parallel")]
pub(crate) fn test_pool() -> crate::Parallel {
    POOL.clone()
}

/// checks that reductions with the given strategy agree with a left fold
macro_rules! reduce_laws {
    ($strategy:expr) => {
        use crate::ops::{CheckedSum, Max, Min, Overflow, Sum};
        use crate::{ReduceError, Reducer};
        use quickcheck::TestResult;
        use std::num::NonZeroUsize;

        fn reducer(batch_size: u8) -> Reducer<impl crate::Strategy> {
            let batch_size = NonZeroUsize::new(batch_size as usize + 1).unwrap();
            Reducer::new($strategy).batch_size(batch_size)
        }

        #[quickcheck]
        fn sum_matches_fold(values: Vec<i64>, batch_size: u8) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }
            let expected = values.iter().fold(0i64, |a, b| a.wrapping_add(*b));
            let actual = reducer(batch_size).reduce(&values, Sum).unwrap();
            TestResult::from_bool(expected == actual)
        }

        #[quickcheck]
        fn concat_preserves_order(values: Vec<u16>, batch_size: u8) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }
            let singletons: Vec<Vec<u16>> = values.iter().map(|x| vec![*x]).collect();
            let concat = |mut a: Vec<u16>, b: Vec<u16>| {
                a.extend(b);
                a
            };
            let actual = reducer(batch_size).reduce(&singletons, concat).unwrap();
            TestResult::from_bool(actual == values)
        }

        #[quickcheck]
        fn single_element_identity(x: i64, batch_size: u8) -> bool {
            let reducer = reducer(batch_size);
            let horner = |a: i64, b: i64| a.wrapping_mul(31).wrapping_add(b);
            reducer.reduce(&[x], Sum).unwrap() == x && reducer.reduce(&[x], horner).unwrap() == x
        }

        #[quickcheck]
        fn horner_matches_fold(values: Vec<i64>, batch_size: u8) -> TestResult {
            // associative, not commutative: (a, x) . (b, y) = (a * b, x * b + y)
            if values.is_empty() {
                return TestResult::discard();
            }
            let pairs: Vec<(i64, i64)> = values.iter().map(|x| (31, *x)).collect();
            let op = |(a, x): (i64, i64), (b, y): (i64, i64)| {
                (a.wrapping_mul(b), x.wrapping_mul(b).wrapping_add(y))
            };
            let expected = values.iter().fold(0i64, |acc, x| acc.wrapping_mul(31).wrapping_add(*x));
            let (_, actual) = reducer(batch_size).reduce(&pairs, op).unwrap();
            TestResult::from_bool(expected == actual)
        }

        #[quickcheck]
        fn min_max(values: Vec<i32>, batch_size: u8) -> TestResult {
            let (min, max) = match (values.iter().min(), values.iter().max()) {
                (Some(min), Some(max)) => (*min, *max),
                _ => return TestResult::discard(),
            };
            let reducer = reducer(batch_size);
            TestResult::from_bool(
                reducer.reduce(&values, Min).unwrap() == min
                    && reducer.reduce(&values, Max).unwrap() == max,
            )
        }

        #[quickcheck]
        fn input_unchanged(values: Vec<u32>, batch_size: u8) -> bool {
            let before = values.clone();
            let _ = reducer(batch_size).reduce(&values, Sum);
            before == values
        }

        #[quickcheck]
        fn empty_is_rejected(batch_size: u8) -> bool {
            let res = reducer(batch_size).reduce(&[] as &[u8], Sum);
            matches!(res, Err(ReduceError::Empty))
        }

        #[quickcheck]
        fn checked_sum(values: Vec<i16>, batch_size: u8) -> TestResult {
            if values.is_empty() {
                return TestResult::discard();
            }
            let exact: i64 = values.iter().map(|x| *x as i64).sum();
            // no partial sum can overflow if the sum of magnitudes fits
            let bound: i64 = values.iter().map(|x| (*x as i64).abs()).sum();
            let res = reducer(batch_size).reduce(&values, CheckedSum);
            TestResult::from_bool(match res {
                Ok(value) => value as i64 == exact,
                Err(ReduceError::Operator(Overflow)) => bound > i16::MAX as i64,
                Err(_) => false,
            })
        }
    };
}
