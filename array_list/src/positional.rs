use crate::{ArrayList, ArrayListError};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Read/replace access by position and nothing else.
///
/// This is all an in-place algorithm needs from a sequence: how long it is,
/// what sits at a position, and a way to put something else there. It says
/// nothing about how the elements are stored.
///
/// # Examples
///
/// ```
/// use array_list::{ArrayList, Positional};
///
/// fn reverse<P: Positional + ?Sized>(seq: &mut P) -> Result<(), array_list::ArrayListError>
/// where
///     P::Item: Clone,
/// {
///     let len = seq.len();
///     for i in 0..len / 2 {
///         let front = seq.element_at(i)?.clone();
///         let back = seq.set_at(len - 1 - i, front)?;
///         seq.set_at(i, back)?;
///     }
///     Ok(())
/// }
///
/// let mut list = ArrayList::from([1, 2, 3]);
/// reverse(&mut list)?;
/// assert_eq!(list.to_vec(), vec![3, 2, 1]);
///
/// let mut plain = vec!['a', 'b'];
/// reverse(&mut plain)?;
/// assert_eq!(plain, vec!['b', 'a']);
/// # Ok::<(), array_list::ArrayListError>(())
/// ```
pub trait Positional {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// # Errors
    ///
    /// `ArrayListError::IndexOutOfBounds` if `index >= len()`.
    fn element_at(&self, index: usize) -> Result<&Self::Item, ArrayListError>;

    /// Stores `value` at `index` and returns what was there.
    ///
    /// # Errors
    ///
    /// `ArrayListError::IndexOutOfBounds` if `index >= len()`.
    fn set_at(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, ArrayListError>;
}

impl<T> Positional for ArrayList<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        ArrayList::len(self)
    }

    #[inline]
    fn element_at(&self, index: usize) -> Result<&T, ArrayListError> {
        self.get(index)
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) -> Result<T, ArrayListError> {
        self.set(index, value)
    }
}

impl<T> Positional for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element_at(&self, index: usize) -> Result<&T, ArrayListError> {
        let len = <[T]>::len(self);
        self.get(index)
            .ok_or(ArrayListError::IndexOutOfBounds { index, len })
    }

    fn set_at(&mut self, index: usize, value: T) -> Result<T, ArrayListError> {
        let len = <[T]>::len(self);
        let slot = self
            .get_mut(index)
            .ok_or(ArrayListError::IndexOutOfBounds { index, len })?;
        Ok(core::mem::replace(slot, value))
    }
}

impl<T> Positional for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element_at(&self, index: usize) -> Result<&T, ArrayListError> {
        self.as_slice().element_at(index)
    }

    fn set_at(&mut self, index: usize, value: T) -> Result<T, ArrayListError> {
        self.as_mut_slice().set_at(index, value)
    }
}
