//! # array_list
//!
//! A growable, indexable list with positional edits and a bidirectional
//! cursor. `no_std` compatible (needs `alloc`).
//!
//! ```rust
//! use array_list::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.push(5);
//! list.push(2);
//! list.insert(0, 9).unwrap();
//!
//! assert_eq!(list.to_vec(), vec![9, 5, 2]);
//! assert_eq!(list.index_of(&2), Some(2));
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use array_list::ArrayList;
//!
//! // Starts with 16 slots, doubles whenever an insert finds it full
//! let mut list = ArrayList::new();
//! for i in 0..17 {
//!     list.push(i);
//! }
//! assert_eq!(list.capacity(), 32);
//! ```
//!
//! [`Positional`] is the narrow `len`/`element_at`/`set_at` view other
//! algorithms (such as the `quick_sort` crate) work through.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod cursor;
pub mod error;
pub mod list;
pub mod membership;
pub mod positional;
mod storage;

pub use cursor::ListCursor;
pub use error::ArrayListError;
pub use list::{ArrayList, DEFAULT_CAPACITY, IntoIter, Iter};
pub use membership::Membership;
pub use positional::Positional;
