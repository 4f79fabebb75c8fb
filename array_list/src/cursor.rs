//! Bidirectional cursor with structural edits.
//!
//! A [`ListCursor`] sits *between* elements: `next()` yields the element
//! after it, `previous()` the one before it. `remove()` and `set()` act on
//! whichever element the last `next()`/`previous()` produced.
//!
//! ```text
//!   [ a ][ b ][ c ]
//!        ^
//!        cursor = 1   next() -> b   previous() -> a
//! ```
//!
//! The cursor holds the list's exclusive borrow, so nothing else can change
//! the list while it is alive. There is no modification counter.

use crate::{ArrayList, ArrayListError};

type Result<T> = core::result::Result<T, ArrayListError>;

/// Cursor over an [`ArrayList`], created by [`ArrayList::cursor`] or
/// [`ArrayList::cursor_at`].
///
/// # Examples
///
/// ```
/// use array_list::ArrayList;
///
/// let mut list = ArrayList::from([1, 2, 4]);
/// let mut cursor = list.cursor();
///
/// while let Ok(&value) = cursor.next() {
///     if value == 2 {
///         cursor.insert(3)?;
///     }
/// }
///
/// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
/// # Ok::<(), array_list::ArrayListError>(())
/// ```
#[derive(Debug)]
pub struct ListCursor<'a, T> {
    list: &'a mut ArrayList<T>,
    cursor: usize,
    last_returned: Option<usize>,
}

impl<'a, T> ListCursor<'a, T> {
    pub(crate) fn front(list: &'a mut ArrayList<T>) -> Self {
        ListCursor {
            list,
            cursor: 0,
            last_returned: None,
        }
    }

    pub(crate) fn new(list: &'a mut ArrayList<T>, index: usize) -> Result<Self> {
        if index > list.len() {
            return Err(ArrayListError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }
        Ok(ListCursor {
            list,
            cursor: index,
            last_returned: None,
        })
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor < self.list.len()
    }

    /// Returns the element after the cursor and moves past it.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::Exhausted` at the back of the list.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(ArrayListError::Exhausted);
        }
        let index = self.cursor;
        self.last_returned = Some(index);
        self.cursor += 1;
        self.list.get(index)
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    /// Moves back one element and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::Exhausted` at the front of the list.
    pub fn previous(&mut self) -> Result<&T> {
        if !self.has_previous() {
            return Err(ArrayListError::Exhausted);
        }
        self.cursor -= 1;
        self.last_returned = Some(self.cursor);
        self.list.get(self.cursor)
    }

    /// Position `next()` would read.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// Position `previous()` would read, `None` at the front.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Removes the element the last `next()`/`previous()` returned.
    ///
    /// Elements after it shift left and the cursor follows them, so the next
    /// `next()` yields what used to come after the removed element.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::NoLastReturned` if there was no step since
    /// the cursor was created or last edited.
    pub fn remove(&mut self) -> Result<T> {
        let last = self.last_returned.ok_or(ArrayListError::NoLastReturned)?;
        let removed = self.list.remove(last)?;
        if last < self.cursor {
            self.cursor -= 1;
        }
        self.last_returned = None;
        Ok(removed)
    }

    /// Replaces the element the last `next()`/`previous()` returned and
    /// hands back the old one. May be repeated on the same element.
    ///
    /// # Errors
    ///
    /// Returns `ArrayListError::NoLastReturned` under the same conditions as
    /// [`remove`](Self::remove).
    pub fn set(&mut self, value: T) -> Result<T> {
        let last = self.last_returned.ok_or(ArrayListError::NoLastReturned)?;
        self.list.set(last, value)
    }

    /// Inserts `value` just before the cursor. A following `next()` is
    /// unaffected; a following `previous()` returns `value`.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.list.insert(self.cursor, value)?;
        self.cursor += 1;
        self.last_returned = None;
        Ok(())
    }
}
