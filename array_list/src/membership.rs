//! Lookup seam for [`ArrayList::remove_all`] and [`ArrayList::retain_all`].

use crate::ArrayList;

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::collections::{BTreeSet, HashSet};

/// A collection that can answer "do you hold this value?".
pub trait Membership<T> {
    fn holds(&self, value: &T) -> bool;
}

impl<T: PartialEq> Membership<T> for [T] {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: PartialEq> Membership<T> for ArrayList<T> {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }
}

#[cfg(feature = "std")]
impl<T, S> Membership<T> for HashSet<T, S>
where
    T: Eq + core::hash::Hash,
    S: core::hash::BuildHasher,
{
    fn holds(&self, value: &T) -> bool {
        self.contains(value)
    }
}
