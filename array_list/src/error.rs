#[cfg(feature = "std")]
use thiserror::Error;

/// Errors raised by [`ArrayList`](crate::ArrayList) and
/// [`ListCursor`](crate::ListCursor).
///
/// Every check runs before the list is touched, so a call that returns one of
/// these has left the list exactly as it was.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayListError {
    /// Requested initial capacity was negative.
    #[cfg_attr(feature = "std", error("Invalid initial capacity: {0}"))]
    InvalidCapacity(isize),

    /// Position outside the range the operation accepts.
    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of bounds for length {len}")
    )]
    IndexOutOfBounds { index: usize, len: usize },

    /// `from..to` is not a sub-range of `0..len`.
    #[cfg_attr(
        feature = "std",
        error("Range {from}..{to} is out of bounds for length {len}")
    )]
    InvalidRange { from: usize, to: usize, len: usize },

    /// The cursor has no element in the requested direction.
    #[cfg_attr(feature = "std", error("no more elements in this direction"))]
    Exhausted,

    /// `remove`/`set` on a cursor with no last returned position.
    #[cfg_attr(
        feature = "std",
        error("cursor has no last returned element; call next or previous first")
    )]
    NoLastReturned,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ArrayListError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrayListError::InvalidCapacity(c) => write!(f, "Invalid initial capacity: {}", c),
            ArrayListError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
            ArrayListError::InvalidRange { from, to, len } => {
                write!(f, "Range {}..{} is out of bounds for length {}", from, to, len)
            }
            ArrayListError::Exhausted => write!(f, "no more elements in this direction"),
            ArrayListError::NoLastReturned => write!(
                f,
                "cursor has no last returned element; call next or previous first"
            ),
        }
    }
}
