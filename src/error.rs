use thiserror::Error;

/// Reasons a sort call can fail. Either error leaves the caller's input untouched and produces no
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// The absent value was passed instead of a sequence.
    #[error("invalid input: no sequence given")]
    InvalidInput,

    /// A comparison between two elements is undefined, e.g. one of them is NaN.
    ///
    /// `left` and `right` are positions in the working buffer at the time of the comparison, not
    /// in the original input.
    #[error("incomparable elements at buffer positions {left} and {right}")]
    IncomparableElements { left: usize, right: usize },
}

impl SortError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SortError::InvalidInput)
    }

    pub fn is_incomparable(&self) -> bool {
        matches!(self, SortError::IncomparableElements { .. })
    }
}
