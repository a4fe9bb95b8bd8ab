use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(input: Option<&[T]>) -> Result<Vec<T>, $crate::SortError>
            where
                T: PartialOrd + Clone,
            {
                sort(input.map(|v| v.iter().cloned()))
            }

            #[inline]
            fn sort_by<T, F>(input: Option<&[T]>, compare: F) -> Result<Vec<T>, $crate::SortError>
            where
                T: Clone,
                F: FnMut(&T, &T) -> Option<std::cmp::Ordering>,
            {
                sort_by(input.map(|v| v.iter().cloned()), compare)
            }
        }
    };
}

pub mod bubble;
pub mod element;
pub mod error;

pub use bubble::early_exit::{sort, sort_by, sort_in_place, sort_in_place_by, sort_slice};
pub use element::{Kind, Number};
pub use error::SortError;

/// Uniform entry point for every sort implementation in this crate, so the same test suite and
/// benchmarks can drive all of them.
///
/// `None` stands for the absent input and must be rejected with [`SortError::InvalidInput`].
pub trait Sort {
    fn name() -> String;

    fn sort<T>(input: Option<&[T]>) -> Result<Vec<T>, SortError>
    where
        T: PartialOrd + Clone;

    fn sort_by<T, F>(input: Option<&[T]>, compare: F) -> Result<Vec<T>, SortError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Option<Ordering>;
}
