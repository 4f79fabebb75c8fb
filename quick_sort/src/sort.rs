use crate::order::{Comparator, NaturalOrder, OrderBy};
use crate::SortError;
use array_list::Positional;
use core::cmp::Ordering;
use tracing::{debug, trace};

/// In-place quicksort over anything [`Positional`].
///
/// Lomuto partitioning with the last element of each range as pivot. Reads
/// and writes go through `element_at`/`set_at` only, so the sorter works the
/// same on an [`ArrayList`](array_list::ArrayList), a `Vec` or a slice.
///
/// - Unstable: equal elements may change relative order
/// - O(n log n) on average, O(n²) on already sorted input
/// - Recurses into the smaller side and loops on the larger, so stack depth
///   stays O(log n) even in the quadratic case
///
/// # Examples
///
/// ```
/// use array_list::ArrayList;
/// use quick_sort::QuickSort;
///
/// let mut list = ArrayList::from([5, 2, 9, 1, 7]);
/// QuickSort::new(&mut list).sort()?;
/// assert_eq!(list.to_vec(), vec![1, 2, 5, 7, 9]);
///
/// let mut words = vec!["pear", "fig", "banana"];
/// QuickSort::with_comparator(&mut words, |a: &&str, b: &&str| a.len().cmp(&b.len())).sort()?;
/// assert_eq!(words, vec!["fig", "pear", "banana"]);
/// # Ok::<(), quick_sort::SortError>(())
/// ```
#[derive(Debug)]
pub struct QuickSort<'a, P: ?Sized, C> {
    target: &'a mut P,
    order: C,
}

impl<'a, P: Positional + ?Sized> QuickSort<'a, P, NaturalOrder> {
    /// Sort by the elements' natural (`PartialOrd`) order.
    pub fn new(target: &'a mut P) -> Self {
        QuickSort {
            target,
            order: NaturalOrder,
        }
    }
}

impl<'a, P: Positional + ?Sized, F> QuickSort<'a, P, OrderBy<F>> {
    /// Sort by `comparator` instead of the elements' own order.
    pub fn with_comparator(target: &'a mut P, comparator: F) -> Self
    where
        F: Fn(&P::Item, &P::Item) -> Ordering,
    {
        QuickSort {
            target,
            order: OrderBy(comparator),
        }
    }
}

impl<'a, P, C> QuickSort<'a, P, C>
where
    P: Positional + ?Sized,
    P::Item: Clone,
    C: Comparator<P::Item>,
{
    /// Sort with any [`Comparator`].
    pub fn with_order(target: &'a mut P, order: C) -> Self {
        QuickSort { target, order }
    }

    /// Sorts the target in place.
    ///
    /// Targets of length 0 or 1 return immediately without comparing.
    ///
    /// # Errors
    ///
    /// - `SortError::NotComparable` the first time two elements have no
    ///   order. The target is left partially sorted, still a permutation of
    ///   its input.
    /// - `SortError::List` if the target rejects an in-range position.
    pub fn sort(&mut self) -> Result<(), SortError> {
        let len = self.target.len();
        if len <= 1 {
            return Ok(());
        }
        debug!(len, "quicksort");
        self.sort_range(0, len - 1)
    }

    /// Sorts the inclusive range `[low, high]`.
    fn sort_range(&mut self, mut low: usize, mut high: usize) -> Result<(), SortError> {
        while low < high {
            let pivot = self.partition(low, high)?;
            trace!(low, high, pivot, "partitioned");

            if pivot - low < high - pivot {
                if pivot > low {
                    self.sort_range(low, pivot - 1)?;
                }
                low = pivot + 1;
            } else {
                self.sort_range(pivot + 1, high)?;
                if pivot == low {
                    break;
                }
                high = pivot - 1;
            }
        }
        Ok(())
    }

    /// Lomuto partition of `[low, high]` around the element at `high`.
    /// Returns the pivot's final position.
    fn partition(&mut self, low: usize, high: usize) -> Result<usize, SortError> {
        // everything in [low, store) compares <= pivot
        let mut store = low;
        for j in low..high {
            if self.compare(j, high)? != Ordering::Greater {
                self.swap(store, j)?;
                store += 1;
            }
        }
        self.swap(store, high)?;
        Ok(store)
    }

    fn compare(&self, a: usize, b: usize) -> Result<Ordering, SortError> {
        let a = self.target.element_at(a)?;
        let b = self.target.element_at(b)?;
        self.order.compare(a, b)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        if i == j {
            return Ok(());
        }
        let first = self.target.element_at(i)?.clone();
        let second = self.target.set_at(j, first)?;
        self.target.set_at(i, second)?;
        Ok(())
    }
}

/// Sorts `target` in place by its natural order.
///
/// # Examples
///
/// ```
/// let mut letters = vec!['c', 'a', 'b'];
/// quick_sort::sort(&mut letters)?;
/// assert_eq!(letters, vec!['a', 'b', 'c']);
/// # Ok::<(), quick_sort::SortError>(())
/// ```
pub fn sort<P>(target: &mut P) -> Result<(), SortError>
where
    P: Positional + ?Sized,
    P::Item: Clone + PartialOrd,
{
    QuickSort::new(target).sort()
}

/// Sorts `target` in place by `comparator`.
pub fn sort_by<P, F>(target: &mut P, comparator: F) -> Result<(), SortError>
where
    P: Positional + ?Sized,
    P::Item: Clone,
    F: Fn(&P::Item, &P::Item) -> Ordering,
{
    QuickSort::with_comparator(target, comparator).sort()
}
