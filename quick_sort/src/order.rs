//! Orderings the sorter can compare with.
//!
//! Either the elements order themselves ([`NaturalOrder`], via `PartialOrd`)
//! or the caller hands one in ([`OrderBy`]). Both are checked one comparison
//! at a time, so an incomparable pair only fails if the sort actually
//! compares it.

use crate::SortError;
use core::cmp::Ordering;

pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, SortError>;
}

/// The elements' own `PartialOrd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, SortError> {
        a.partial_cmp(b).ok_or(SortError::NotComparable)
    }
}

/// A caller-supplied total order.
#[derive(Debug, Clone, Copy)]
pub struct OrderBy<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for OrderBy<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, SortError> {
        Ok((self.0)(a, b))
    }
}
