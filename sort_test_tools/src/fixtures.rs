//! Named example inputs with their expected outcome.

use bubble_sort::{nums, Number};

#[derive(Clone, Debug)]
pub enum Expected {
    Sorted(Vec<Number>),
    InvalidInput,
    Incomparable,
}

#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: &'static str,
    /// `None` is the absent input.
    pub input: Option<Vec<Number>>,
    pub expected: Expected,
}

fn sorted(name: &'static str, input: Vec<Number>, expected: Vec<Number>) -> Fixture {
    Fixture {
        name,
        input: Some(input),
        expected: Expected::Sorted(expected),
    }
}

pub fn catalogue() -> Vec<Fixture> {
    vec![
        sorted("empty", nums![], nums![]),
        sorted("singleton", nums![42], nums![42]),
        sorted(
            "already_sorted",
            nums![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            nums![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        ),
        sorted(
            "reverse_sorted",
            nums![10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
            nums![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        ),
        sorted(
            "random_order",
            nums![5, 3, 8, 4, 2, 7, 1, 6, 9, 10],
            nums![1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        ),
        sorted(
            "negatives_and_zero",
            nums![5, -3, 0, -10, 2, 7, -5],
            nums![-10, -5, -3, 0, 2, 5, 7],
        ),
        sorted(
            "fractional",
            nums![3.5, 1.2, 2.8, 0.5, 4.1, 2.3],
            nums![0.5, 1.2, 2.3, 2.8, 3.5, 4.1],
        ),
        sorted(
            "mixed_kinds",
            nums![5, 1.5, 3, 2.7, 4, 0.5],
            nums![0.5, 1.5, 2.7, 3, 4, 5],
        ),
        sorted(
            "duplicates",
            nums![3, 1, 2, 3, 1, 5, 2, 1],
            nums![1, 1, 1, 2, 2, 3, 3, 5],
        ),
        sorted("all_equal", nums![5, 5, 5, 5, 5], nums![5, 5, 5, 5, 5]),
        sorted(
            "large_magnitudes",
            nums![1000, 5000, 100, 500, 10000, 50],
            nums![50, 100, 500, 1000, 5000, 10000],
        ),
        sorted(
            "partial_order",
            nums![1, 2, 5, 3, 4, 6, 7, 8],
            nums![1, 2, 3, 4, 5, 6, 7, 8],
        ),
        Fixture {
            name: "invalid_input",
            input: None,
            expected: Expected::InvalidInput,
        },
        Fixture {
            name: "nan",
            input: Some(nums![3, f64::NAN, 1]),
            expected: Expected::Incomparable,
        },
        // Nothing to compare, so the NaN is never looked at.
        sorted("lone_nan", nums![f64::NAN], nums![f64::NAN]),
        // Equal values of different kinds keep their input order.
        sorted(
            "equal_across_kinds",
            nums![3.0, 2, 3, 1.0, 2.0],
            nums![1.0, 2, 2.0, 3.0, 3],
        ),
        sorted(
            "extreme_integers",
            nums![i64::MAX, 0, i64::MIN, -1, i64::MAX - 1],
            nums![i64::MIN, -1, 0, i64::MAX - 1, i64::MAX],
        ),
        // 2^53 + 1 has no exact f64 representation, it must still order above 2^53.
        sorted(
            "beyond_f64_precision",
            nums![
                9_007_199_254_740_993i64,
                9_007_199_254_740_992.0,
                f64::INFINITY,
                f64::NEG_INFINITY
            ],
            nums![
                f64::NEG_INFINITY,
                9_007_199_254_740_992.0,
                9_007_199_254_740_993i64,
                f64::INFINITY
            ],
        ),
    ]
}

pub fn get(name: &str) -> Option<Fixture> {
    catalogue().into_iter().find(|fixture| fixture.name == name)
}
