//! Bubble sort that shrinks the unsorted region to the position of the last swap.
//!
//! Everything behind the last swap of a pass is already in its final place, which can skip more
//! than one element per pass on partially sorted input. A pass without swaps sets the bound to
//! zero and ends the sort the same way the early exit variant does.

use std::cmp::Ordering;

use tracing::trace;

use crate::bubble::{is_greater_at, materialize};
use crate::SortError;

sort_impl!("bubble_last_swap_stable");

#[inline]
pub fn sort<I>(input: Option<I>) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    sort_by(input, |a, b| a.partial_cmp(b))
}

pub fn sort_by<I, F>(input: Option<I>, compare: F) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Option<Ordering>,
{
    let mut v = materialize(input)?;
    sort_in_place_by(&mut v, compare)?;

    Ok(v)
}

pub fn sort_in_place_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    let len = v.len();

    let mut passes = 0usize;
    let mut swaps = 0usize;
    let mut comparisons = 0usize;

    // v[unsorted_len..] is sorted and no element in it is smaller than any in v[..unsorted_len].
    let mut unsorted_len = len;
    while unsorted_len > 1 {
        passes += 1;
        let mut last_swap = 0;

        for j in 0..(unsorted_len - 1) {
            comparisons += 1;
            if is_greater_at(v, j, &mut compare)? {
                v.swap(j, j + 1);
                swaps += 1;
                last_swap = j + 1;
            }
        }

        unsorted_len = last_swap;
    }

    trace!(len, passes, swaps, comparisons, "last swap bubble sort done");

    Ok(())
}
