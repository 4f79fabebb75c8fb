use crate::storage::Slots;
use crate::{ArrayListError, ListCursor, Membership};

#[cfg(not(feature = "std"))]
use alloc::vec::{self, Vec};
#[cfg(feature = "std")]
use std::vec;

use core::fmt;
use core::iter::FusedIterator;

/// Capacity used by [`ArrayList::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 16;

type Result<T> = core::result::Result<T, ArrayListError>;

/// A growable, indexable list backed by one contiguous run of slots.
///
/// `ArrayList<T>` keeps its elements in positional order at the front of its
/// backing store. Inserting or removing in the middle shifts the tail by one
/// slot; appending is amortized O(1) because a full store doubles in size.
/// Capacity never shrinks on its own.
///
/// # Examples
///
/// ## Positional edits
///
/// ```
/// use array_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push(1);
/// list.push(2);
/// list.push(3);
///
/// list.insert(1, 5)?;
/// assert_eq!(list.to_vec(), vec![1, 5, 2, 3]);
///
/// assert_eq!(list.remove(0)?, 1);
/// assert_eq!(list.set(0, 9)?, 5);
/// assert_eq!(list.to_vec(), vec![9, 2, 3]);
/// # Ok::<(), array_list::ArrayListError>(())
/// ```
///
/// ## Walking with a cursor
///
/// ```
/// use array_list::ArrayList;
///
/// let mut list: ArrayList<i32> = (1..=3).collect();
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.next()?, &1);
/// assert_eq!(cursor.next()?, &2);
/// cursor.remove()?;
/// assert_eq!(cursor.next()?, &3);
///
/// assert_eq!(list.to_vec(), vec![1, 3]);
/// # Ok::<(), array_list::ArrayListError>(())
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    slots: Slots<T>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::<u8>::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 16);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// A capacity of zero is allowed; the first insert grows it to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::with_capacity(0);
    /// list.push("a");
    /// assert_eq!(list.capacity(), 1);
    /// list.push("b");
    /// assert_eq!(list.capacity(), 2);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            slots: Slots::with_capacity(capacity),
            len: 0,
        }
    }

    /// Creates an empty list from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::InvalidCapacity` if `capacity` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::{ArrayList, ArrayListError};
    ///
    /// assert_eq!(ArrayList::<u8>::try_with_capacity(4)?.capacity(), 4);
    /// assert_eq!(
    ///     ArrayList::<u8>::try_with_capacity(-1).unwrap_err(),
    ///     ArrayListError::InvalidCapacity(-1)
    /// );
    /// # Ok::<(), ArrayListError>(())
    /// ```
    pub fn try_with_capacity(capacity: isize) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| ArrayListError::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    fn out_of_bounds(&self, index: usize) -> ArrayListError {
        ArrayListError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from([10, 20]);
    /// assert_eq!(list.get(1)?, &20);
    /// assert!(list.get(2).is_err());
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        // `index == len` is past the last live slot
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        self.slots.get(index).ok_or_else(|| self.out_of_bounds(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let err = self.out_of_bounds(index);
        self.slots.get_mut(index).ok_or(err)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from(["x", "y"]);
    /// assert_eq!(list.set(0, "z")?, "x");
    /// assert_eq!(list.to_vec(), vec!["z", "y"]);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let err = self.out_of_bounds(index);
        self.slots.replace(index, value).ok_or(err)
    }

    /// Inserts `value` at `index`, shifting every element at or after
    /// `index` one position toward the tail.
    ///
    /// `index == len()` appends. A full backing store is doubled first.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// list.insert(1, 5)?;
    /// assert_eq!(list.to_vec(), vec![1, 5, 2, 3]);
    /// assert_eq!(list.len(), 4);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        self.insert_unchecked(index, value);
        Ok(())
    }

    fn insert_unchecked(&mut self, index: usize, value: T) {
        if self.len == self.slots.capacity() {
            self.slots.grow();
        }
        self.slots.insert(index, self.len, value);
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one position toward the head.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from(['a', 'b', 'c']);
    /// assert_eq!(list.remove(0)?, 'a');
    /// assert_eq!(list.to_vec(), vec!['b', 'c']);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        let err = self.out_of_bounds(index);
        let removed = self.slots.remove(index, self.len);
        self.len -= 1;
        removed.ok_or(err)
    }

    /// Appends `value` to the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push(42);
    /// assert_eq!(list.get(0)?, &42);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn push(&mut self, value: T) {
        self.insert_unchecked(self.len, value);
    }

    /// Appends every element of `other`, in its iteration order.
    ///
    /// Returns `true` if `other` produced at least one element.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, other: I) -> bool {
        let before = self.len;
        for value in other {
            self.push(value);
        }
        self.len != before
    }

    /// Inserts every element of `other` starting at `index`, keeping the
    /// order `other` produces them in.
    ///
    /// Returns `true` if `other` produced at least one element.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index > len()`. The
    /// list is untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 4]);
    /// assert!(list.insert_all(1, [2, 3])?);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, other: I) -> Result<bool> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        let mut at = index;
        for value in other {
            self.insert_unchecked(at, value);
            at += 1;
        }
        Ok(at != index)
    }

    /// Removes every element, emptying each live slot. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear(self.len);
        self.len = 0;
    }

    /// Returns a front-to-back iterator over the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from([1, 2, 3]);
    /// let total: i32 = list.iter().sum();
    /// assert_eq!(total, 6);
    /// assert_eq!(list.iter().rev().next(), Some(&3));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.live(self.len).iter(),
        }
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor(&mut self) -> ListCursor<'_, T> {
        ListCursor::front(self)
    }

    /// Returns a cursor whose first `next()` yields the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::IndexOutOfBounds` if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_at(3)?;
    /// assert!(!cursor.has_next());
    /// assert_eq!(cursor.previous()?, &3);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn cursor_at(&mut self, index: usize) -> Result<ListCursor<'_, T>> {
        ListCursor::new(self, index)
    }

    /// Removes every element `other` holds, in one forward pass.
    ///
    /// Returns `true` if anything was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1, 2, 3, 2, 1]);
    /// assert!(list.remove_all(&[2][..]));
    /// assert_eq!(list.to_vec(), vec![1, 3, 1]);
    /// ```
    pub fn remove_all<M: Membership<T> + ?Sized>(&mut self, other: &M) -> bool {
        self.remove_where(|value| other.holds(value))
    }

    /// Removes every element `other` does not hold, in one forward pass.
    ///
    /// Returns `true` if anything was removed.
    pub fn retain_all<M: Membership<T> + ?Sized>(&mut self, other: &M) -> bool {
        self.remove_where(|value| !other.holds(value))
    }

    fn remove_where<F: FnMut(&T) -> bool>(&mut self, mut doomed: F) -> bool {
        let mut modified = false;
        let mut cursor = self.cursor();
        while let Ok(value) = cursor.next() {
            if doomed(value) && cursor.remove().is_ok() {
                modified = true;
            }
        }
        modified
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Position of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from([Some(1), None, Some(1), None]);
    /// assert_eq!(list.index_of(&None), Some(1));
    /// assert_eq!(list.last_index_of(&None), Some(3));
    /// assert_eq!(list.index_of(&Some(7)), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|e| e == value)
    }

    /// Position of the last element equal to `value`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|e| e == value)
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if every element `other` yields is in this list.
    pub fn contains_all<'b, I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = &'b T>,
        T: 'b,
    {
        other.into_iter().all(|value| self.contains(value))
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> ArrayList<T> {
    /// Copies the live elements into a fresh `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the live elements into `buf`, or into a new buffer if `buf` is
    /// too short.
    ///
    /// - `buf.len() < len()`: a new buffer of exactly `len()` is returned
    /// - otherwise the elements fill the front of `buf`; if `buf` is longer,
    ///   the slot right after them is set to `None` as an end marker
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from([1, 2]);
    ///
    /// let buf = list.to_array_in(vec![Some(9); 4]);
    /// assert_eq!(buf, vec![Some(1), Some(2), None, Some(9)]);
    ///
    /// let buf = list.to_array_in(Vec::new());
    /// assert_eq!(buf, vec![Some(1), Some(2)]);
    /// ```
    pub fn to_array_in(&self, mut buf: Vec<Option<T>>) -> Vec<Option<T>> {
        if buf.len() < self.len {
            return self.iter().cloned().map(Some).collect();
        }
        for (slot, value) in buf.iter_mut().zip(self.iter()) {
            *slot = Some(value.clone());
        }
        if let Some(marker) = buf.get_mut(self.len) {
            *marker = None;
        }
        buf
    }

    /// Copies `[from, to)` into a new, independent list.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::InvalidRange` unless `from <= to <= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_list::ArrayList;
    ///
    /// let list = ArrayList::from([1, 2, 3]);
    /// let mut sub = list.sub_list(1, 3)?;
    /// sub.push(4);
    ///
    /// assert_eq!(sub.to_vec(), vec![2, 3, 4]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// # Ok::<(), array_list::ArrayListError>(())
    /// ```
    pub fn sub_list(&self, from: usize, to: usize) -> Result<ArrayList<T>> {
        if from > to || to > self.len {
            return Err(ArrayListError::InvalidRange {
                from,
                to,
                len: self.len,
            });
        }
        let mut sub = ArrayList::with_capacity(to - from);
        sub.add_all(self.iter().skip(from).take(to - from).cloned());
        Ok(sub)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> core::ops::Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> core::ops::IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = ArrayList::with_capacity(iter.size_hint().0);
        list.add_all(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.slots.into_live(self.len).into_iter(),
        }
    }
}

/// Borrowing iterator returned by [`ArrayList::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `ArrayList::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().flatten()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn new_list_uses_default_capacity() {
        let list = ArrayList::<u32>::new();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
        assert_eq!(ArrayList::<u32>::default().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(
            ArrayList::<u32>::try_with_capacity(-1).unwrap_err(),
            ArrayListError::InvalidCapacity(-1)
        );
        assert!(ArrayList::<u32>::try_with_capacity(0).is_ok());
    }

    #[test]
    fn push_and_get() -> Result<()> {
        let mut list = ArrayList::new();
        list.push(1);
        list.push(2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0)?, &1);
        assert_eq!(list.get(1)?, &2);
        Ok(())
    }

    #[test]
    fn get_rejects_index_equal_to_len() {
        let mut list = ArrayList::from([1, 2, 3]);
        let expected = ArrayListError::IndexOutOfBounds { index: 3, len: 3 };
        assert_eq!(list.get(3).unwrap_err(), expected);
        assert_eq!(list.get_mut(3).unwrap_err(), expected);
        assert_eq!(list.set(3, 9).unwrap_err(), expected);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut list = ArrayList::with_capacity(2);
        list.push('a');
        list.push('b');
        assert_eq!(list.capacity(), 2);
        list.push('c');
        assert_eq!(list.capacity(), 4);
        list.push('d');
        list.push('e');
        assert_eq!(list.capacity(), 8);
    }

    #[test]
    fn zero_capacity_grows_to_one() {
        let mut list = ArrayList::with_capacity(0);
        list.push(1);
        assert_eq!(list.capacity(), 1);
    }

    #[test]
    fn capacity_does_not_shrink() -> Result<()> {
        let mut list: ArrayList<u32> = (0..40).collect();
        let capacity = list.capacity();
        while !list.is_empty() {
            list.remove(0)?;
        }
        list.clear();
        assert_eq!(list.capacity(), capacity);
        Ok(())
    }

    #[test]
    fn insert_in_middle() -> Result<()> {
        let mut list = ArrayList::from([1, 2, 3]);
        list.insert(1, 5)?;
        assert_eq!(list.to_vec(), vec![1, 5, 2, 3]);
        assert_eq!(list.len(), 4);
        Ok(())
    }

    #[test]
    fn insert_at_ends() -> Result<()> {
        let mut list = ArrayList::from([2]);
        list.insert(0, 1)?;
        list.insert(2, 3)?;
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn insert_past_len_fails_without_mutation() {
        let mut list = ArrayList::from([1, 2]);
        assert!(matches!(
            list.insert(3, 9),
            Err(ArrayListError::IndexOutOfBounds { index: 3, len: 2 })
        ));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn remove_shifts_left() -> Result<()> {
        let mut list = ArrayList::from([1, 2, 3, 4]);
        assert_eq!(list.remove(1)?, 2);
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
        assert_eq!(list.remove(2)?, 4);
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert!(list.remove(2).is_err());
        Ok(())
    }

    #[test]
    fn removed_values_are_not_retained() -> Result<()> {
        let shared = Rc::new(7);
        let mut list = ArrayList::new();
        list.push(Rc::clone(&shared));
        list.push(Rc::clone(&shared));
        list.push(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 4);

        drop(list.remove(0)?);
        assert_eq!(Rc::strong_count(&shared), 3);

        assert!(list.remove_item(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);

        list.clear();
        assert_eq!(Rc::strong_count(&shared), 1);
        Ok(())
    }

    #[test]
    fn clear_twice() {
        let mut list = ArrayList::from([1, 2, 3]);
        list.clear();
        assert_eq!(list.len(), 0);
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn set_returns_previous() -> Result<()> {
        let mut list = ArrayList::from(["a", "b"]);
        assert_eq!(list.set(1, "c")?, "b");
        assert_eq!(list.to_vec(), vec!["a", "c"]);
        Ok(())
    }

    #[test]
    fn search_by_value() {
        let list = ArrayList::from([3, 1, 4, 1, 5]);
        assert_eq!(list.index_of(&1), Some(1));
        assert_eq!(list.last_index_of(&1), Some(3));
        assert_eq!(list.index_of(&9), None);
        assert!(list.contains(&5));
        assert!(!list.contains(&2));
    }

    #[test]
    fn absent_values_match_absent_slots() {
        let mut list = ArrayList::from([Some("a"), None, Some("b")]);
        assert!(list.contains(&None));
        assert_eq!(list.index_of(&None), Some(1));
        assert!(list.remove_item(&None));
        assert!(!list.contains(&None));
    }

    #[test]
    fn remove_item_takes_first_occurrence() {
        let mut list = ArrayList::from([1, 2, 1]);
        assert!(list.remove_item(&1));
        assert_eq!(list.to_vec(), vec![2, 1]);
        assert!(!list.remove_item(&7));
    }

    #[test]
    fn contains_all_checks_every_element() {
        let list = ArrayList::from([1, 2, 3]);
        assert!(list.contains_all(&[3, 1]));
        assert!(list.contains_all(&Vec::<i32>::new()));
        assert!(!list.contains_all(&[1, 4]));
    }

    #[test]
    fn add_all_reports_non_empty_input() {
        let mut list = ArrayList::from([1]);
        assert!(list.add_all([2, 3]));
        assert!(!list.add_all(Vec::new()));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn insert_all_keeps_source_order() -> Result<()> {
        let mut list = ArrayList::from([1, 5]);
        assert!(list.insert_all(1, vec![2, 3, 4])?);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
        assert!(!list.insert_all(0, Vec::new())?);
        Ok(())
    }

    #[test]
    fn insert_all_validates_index_first() {
        let mut list = ArrayList::from([1]);
        assert!(list.insert_all(2, [7, 8]).is_err());
        assert_eq!(list.to_vec(), vec![1]);
    }

    #[test]
    fn remove_all_and_retain_all() {
        let mut list = ArrayList::from([1, 2, 3, 4, 2]);
        assert!(list.remove_all(&vec![2, 4]));
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert!(!list.remove_all(&vec![9]));

        let mut list = ArrayList::from([1, 2, 3, 4, 2]);
        assert!(list.retain_all(&ArrayList::from([2, 3])));
        assert_eq!(list.to_vec(), vec![2, 3, 2]);
        assert!(!list.retain_all(&[2, 3][..]));
    }

    #[test]
    fn retain_all_with_empty_other_empties_list() {
        let mut list = ArrayList::from([1, 2, 3]);
        assert!(list.retain_all(&Vec::new()));
        assert!(list.is_empty());
    }

    #[test]
    fn sub_list_is_independent() -> Result<()> {
        let source = ArrayList::from([1, 2, 3]);
        let mut sub = source.sub_list(1, 3)?;
        assert_eq!(sub.to_vec(), vec![2, 3]);
        assert_eq!(sub.capacity(), 2);

        sub.set(0, 20)?;
        sub.push(4);
        assert_eq!(sub.to_vec(), vec![20, 3, 4]);
        assert_eq!(source.to_vec(), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn sub_list_bounds() -> Result<()> {
        let list = ArrayList::from([1, 2, 3]);
        assert!(list.sub_list(3, 3)?.is_empty());
        assert_eq!(list.sub_list(0, 3)?.to_vec(), vec![1, 2, 3]);
        assert_eq!(
            list.sub_list(2, 1).unwrap_err(),
            ArrayListError::InvalidRange { from: 2, to: 1, len: 3 }
        );
        assert!(list.sub_list(0, 4).is_err());
        Ok(())
    }

    #[test]
    fn to_array_in_buffer_rules() {
        let list = ArrayList::from([1, 2, 3]);

        let exact = list.to_array_in(vec![None; 3]);
        assert_eq!(exact, vec![Some(1), Some(2), Some(3)]);

        let short = list.to_array_in(vec![Some(0)]);
        assert_eq!(short, vec![Some(1), Some(2), Some(3)]);

        let long = list.to_array_in(vec![Some(0); 5]);
        assert_eq!(long, vec![Some(1), Some(2), Some(3), None, Some(0)]);
    }

    #[test]
    fn index_operators() {
        let mut list = ArrayList::from([1, 2]);
        assert_eq!(list[1], 2);
        list[0] = 10;
        assert_eq!(list[0], 10);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_operator_panics_past_end() {
        let list = ArrayList::from([1, 2]);
        let _value = list[2];
    }

    #[test]
    fn iterators() {
        let list = ArrayList::from([1, 2, 3]);
        assert_eq!(list.iter().len(), 3);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!((&list).into_iter().count(), 3);

        let owned: Vec<i32> = list.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = ArrayList::with_capacity(1);
        a.push(1);
        a.push(2);
        let b = ArrayList::from([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, ArrayList::from([2, 1]));
    }

    #[test]
    fn debug_prints_live_elements() {
        let list = ArrayList::from([1, 2]);
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }
}
