use array_list::ArrayListError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Two elements had no ordering between them (e.g. a NaN under
    /// `PartialOrd`).
    #[cfg_attr(
        feature = "std",
        error("elements are not comparable; supply a comparator")
    )]
    NotComparable,

    /// The target rejected a position it reported as in range.
    #[cfg_attr(feature = "std", error("positional access failed: {0}"))]
    List(#[cfg_attr(feature = "std", from)] ArrayListError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for SortError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SortError::NotComparable => {
                write!(f, "elements are not comparable; supply a comparator")
            }
            SortError::List(e) => write!(f, "positional access failed: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<ArrayListError> for SortError {
    fn from(err: ArrayListError) -> Self {
        SortError::List(err)
    }
}
