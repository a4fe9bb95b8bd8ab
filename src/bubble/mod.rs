//! Adjacent-swap sorts.
//!
//! Both variants share the same observable contract: the input is materialised into a freshly
//! owned buffer, sorted there with strict `>` comparisons, and handed back only if every
//! comparison was defined.

use std::cmp::Ordering;

use tracing::debug;

use crate::SortError;

pub mod early_exit;
pub mod last_swap;

pub(crate) fn materialize<I>(input: Option<I>) -> Result<Vec<I::Item>, SortError>
where
    I: IntoIterator,
{
    input
        .map(|iter| iter.into_iter().collect())
        .ok_or(SortError::InvalidInput)
}

/// Returns `true` if `v[j]` is strictly greater than `v[j + 1]`.
///
/// Equal neighbours are never reported, which keeps runs of equal elements in input order.
#[inline]
pub(crate) fn is_greater_at<T, F>(v: &[T], j: usize, compare: &mut F) -> Result<bool, SortError>
where
    F: FnMut(&T, &T) -> Option<Ordering>,
{
    match compare(&v[j], &v[j + 1]) {
        Some(ordering) => Ok(ordering == Ordering::Greater),
        None => {
            debug!(left = j, right = j + 1, len = v.len(), "incomparable elements");
            Err(SortError::IncomparableElements {
                left: j,
                right: j + 1,
            })
        }
    }
}
