// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Finite sets with structural equality and hashing.
//!
//! A topology is a set *of sets*, so subsets have to be usable as hash keys
//! and compared by content. [`Set`] wraps an `FxHashSet` and provides:
//!
//! - equality by mutual containment, independent of insertion order,
//! - an order-independent hash (per-element digests combined by wrapping
//!   addition), so `Set<Set<T>>` deduplicates value-equal members,
//! - non-mutating algebra: every operation returns a fresh set.

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};
use serde::{Deserialize, Serialize};

/// Bound for anything that can be a member of a [`Set`].
pub trait Element: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Element for T {}

/// A finite set of unique elements.
///
/// # Example
///
/// ```
/// use fintopo_core::Set;
///
/// let a = Set::from(['a', 'b']);
/// let b = Set::from(['b', 'a']);
/// assert_eq!(a, b);
///
/// let family: Set<Set<char>> = [a, b, Set::new()].into_iter().collect();
/// assert_eq!(family.len(), 2);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct Set<T>(FxHashSet<T>);

/// A family of subsets of a ground set; a topology once validated.
pub type Topology<T> = Set<Set<T>>;

impl<T> Set<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(FxHashSet::default())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the elements. The order is arbitrary but stable while the
    /// set is not modified.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Element> Set<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// True if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.len() <= other.len() && self.0.iter().all(|e| other.0.contains(e))
    }

    /// True if every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !small.0.iter().any(|e| large.0.contains(e))
    }

    pub fn union(&self, other: &Set<T>) -> Set<T> {
        self.0.union(&other.0).cloned().collect()
    }

    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.0.difference(&other.0).cloned().collect()
    }

    /// `self − {value}`.
    pub fn without(&self, value: &T) -> Set<T> {
        self.0.iter().filter(|e| *e != value).cloned().collect()
    }
}

impl<T: Ord + Clone> Set<T> {
    /// Elements in ascending order, for deterministic rendering.
    pub fn to_sorted_vec(&self) -> Vec<T> {
        let mut items: Vec<T> = self.0.iter().cloned().collect();
        items.sort();
        items
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Element> Eq for Set<T> {}

impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Wrapping addition commutes, so iteration order never leaks into the hash.
        let digest = self.0.iter().fold(0u64, |acc, e| {
            let mut hasher = FxHasher::default();
            e.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.0.len());
        state.write_u64(digest);
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

/// Renders as `{a, b, c}`; nested families render as `{{}, {a}}`.
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str("}")
    }
}

impl<T: Element> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Element> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Set<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
