//! Classical bubble sort with early exit.
//!
//! After pass `i` the largest `i + 1` elements sit in their final positions at the tail, so every
//! pass looks at one element less than the previous one. A pass without a single swap proves the
//! buffer sorted, which makes already sorted input cost exactly `n - 1` comparisons.

use std::cmp::Ordering;

use tracing::trace;

use crate::bubble::{is_greater_at, materialize};
use crate::SortError;

sort_impl!("bubble_early_exit_stable");

/// Returns a new vector with the elements of `input` in non-decreasing order.
///
/// `None` is rejected with [`SortError::InvalidInput`]. Pass `Some(&v)` to sort references to the
/// elements of `v` without cloning them, or `Some(v.iter().cloned())` for owned copies.
#[inline]
pub fn sort<I>(input: Option<I>) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    sort_by(input, |a, b| a.partial_cmp(b))
}

/// Like [`sort`], with a caller supplied partial comparison. A `None` from `compare` aborts the
/// sort with [`SortError::IncomparableElements`].
pub fn sort_by<I, F>(input: Option<I>, compare: F) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Option<Ordering>,
{
    let mut v = materialize(input)?;
    sort_in_place_by(&mut v, compare)?;

    Ok(v)
}

#[inline]
pub fn sort_slice<T>(v: &[T]) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone,
{
    sort(Some(v.iter().cloned()))
}

#[inline]
pub fn sort_in_place<T>(v: &mut [T]) -> Result<(), SortError>
where
    T: PartialOrd,
{
    sort_in_place_by(v, |a, b| a.partial_cmp(b))
}

/// Sorts `v` in place.
///
/// On error `v` still holds a permutation of its original elements, but in no particular order.
/// Use [`sort_by`] if a failed call must leave the input as it was.
pub fn sort_in_place_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let len = v.len();
    if len <= 1 {
        return Ok(());
    }

    let mut passes = 0usize;
    let mut swaps = 0usize;
    let mut comparisons = 0usize;

    for i in 0..len {
        passes += 1;
        let mut swapped = false;

        for j in 0..(len - i - 1) {
            comparisons += 1;
            if is_greater_at(v, j, &mut compare)? {
                v.swap(j, j + 1);
                swaps += 1;
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    trace!(len, passes, swaps, comparisons, "early exit bubble sort done");

    Ok(())
}
