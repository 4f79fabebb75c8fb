//! # quick_sort
//!
//! In-place recursive quicksort that touches its target only through
//! [`array_list::Positional`]: length, read at a position, replace at a
//! position. `no_std` compatible.
//!
//! ```rust
//! use array_list::ArrayList;
//! use quick_sort::QuickSort;
//!
//! let mut list = ArrayList::from(["a", "c", "b", "e", "d"]);
//! QuickSort::new(&mut list).sort().unwrap();
//! assert_eq!(list.to_vec(), vec!["a", "b", "c", "d", "e"]);
//! ```
//!
//! ## Ordering
//!
//! Without a comparator the elements' `PartialOrd` is used, and a pair with
//! no order between them stops the sort with [`SortError::NotComparable`]:
//!
//! ```rust
//! use quick_sort::{QuickSort, SortError};
//!
//! let mut readings = vec![2.5, f64::NAN, 1.0];
//! assert_eq!(QuickSort::new(&mut readings).sort(), Err(SortError::NotComparable));
//!
//! // A total order sorts them anyway
//! QuickSort::with_comparator(&mut readings, |a: &f64, b: &f64| a.total_cmp(b)).sort().unwrap();
//! assert_eq!(readings[..2], [1.0, 2.5]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod order;
pub mod sort;

pub use error::SortError;
pub use order::{Comparator, NaturalOrder, OrderBy};
pub use sort::{QuickSort, sort, sort_by};
