#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

use tracing::trace;

/// The backing store of an [`ArrayList`](crate::ArrayList).
///
/// - A fixed run of `capacity` slots, each either occupied or empty
/// - Knows nothing about the live length; callers pass it in
/// - Empty slots are always `None`, so a removed value is dropped (or handed
///   back to the caller) immediately instead of lingering in the buffer
#[derive(Debug, Clone)]
pub struct Slots<T> {
    buf: Box<[Option<T>]>,
}

impl<T> Slots<T> {
    /// Allocate `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let buf: Vec<Option<T>> = (0..capacity).map(|_| None).collect();
        Slots {
            buf: buf.into_boxed_slice(),
        }
    }

    /// Total slot count
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Double the slot count (0 grows to 1). Returns the new capacity.
    pub fn grow(&mut self) -> usize {
        let old_capacity = self.buf.len();
        let new_capacity = if old_capacity == 0 {
            1
        } else {
            old_capacity.saturating_mul(2)
        };

        let mut buf = core::mem::take(&mut self.buf).into_vec();
        buf.resize_with(new_capacity, || None);
        self.buf = buf.into_boxed_slice();

        trace!(old_capacity, new_capacity, "growing backing store");
        new_capacity
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index).and_then(Option::as_ref)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index).and_then(Option::as_mut)
    }

    /// Overwrite an occupied slot, returning what was there.
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.buf[index].replace(value)
    }

    /// Open a hole at `index` by shifting `[index, len)` one slot toward the
    /// tail, then fill it. Requires `index <= len < capacity`.
    pub fn insert(&mut self, index: usize, len: usize, value: T) {
        debug_assert!(index <= len && len < self.buf.len());
        // slot `len` is empty; rotating carries it down to `index`
        self.buf[index..=len].rotate_right(1);
        self.buf[index] = Some(value);
    }

    /// Take the value at `index` and close the gap by shifting
    /// `(index, len)` one slot toward the head. The vacated tail slot ends
    /// up empty. Requires `index < len <= capacity`.
    pub fn remove(&mut self, index: usize, len: usize) -> Option<T> {
        debug_assert!(index < len && len <= self.buf.len());
        let removed = self.buf[index].take();
        self.buf[index..len].rotate_left(1);
        removed
    }

    /// Empty every slot in `[0, len)`.
    pub fn clear(&mut self, len: usize) {
        for slot in &mut self.buf[..len] {
            *slot = None;
        }
    }

    /// The first `len` slots.
    #[inline]
    pub fn live(&self, len: usize) -> &[Option<T>] {
        &self.buf[..len]
    }

    /// Give up the buffer, keeping only the first `len` slots.
    pub fn into_live(self, len: usize) -> Vec<Option<T>> {
        let mut buf = self.buf.into_vec();
        buf.truncate(len);
        buf
    }
}
