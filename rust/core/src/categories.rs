// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point categories of a subset `A` of a topological space `(X, τ)`.
//!
//! | category | definition |
//! |----------|------------|
//! | limit    | `{p ∈ X : ∀G ∈ τ, p ∈ G ⟹ (G − {p}) ∩ A ≠ ∅}` |
//! | closure  | intersection of all closed supersets of `A` |
//! | interior | union of all open subsets of `A` |
//! | exterior | `X − closure(A)` |
//! | boundary | `closure(A) − interior(A)` |
//!
//! Example: `X = {a, b, c, d}`, `τ = {∅, {a}, {b, c}, {a, b, c}, X}`,
//! `A = {b, d}`. The closed sets are `X, {b, c, d}, {a, d}, {d}, ∅`; those
//! containing `A` are `X` and `{b, c, d}`, so `closure(A) = {b, c, d}`.

use crate::error::Result;
use crate::set::{Element, Set, Topology};
use crate::validator::{ensure_subset, ensure_topology};

/// A subset bound to its ground set and a validated topology.
///
/// All validation happens in [`SubsetCategories::new`]; the accessors
/// compute fresh sets on every call and never fail.
///
/// # Example
///
/// ```
/// use fintopo_core::{Set, SubsetCategories, Topology};
///
/// let set = Set::from(['a', 'b', 'c']);
/// let t: Topology<char> = [Set::new(), Set::from(['a']), Set::from(['a', 'b']), set.clone()].into();
/// let categories = SubsetCategories::new(set, Set::from(['a', 'c']), t).unwrap();
///
/// assert_eq!(categories.interior_points(), Set::from(['a']));
/// ```
#[derive(Debug, Clone)]
pub struct SubsetCategories<T> {
    set: Set<T>,
    subset: Set<T>,
    topology: Topology<T>,
}

impl<T: Element> SubsetCategories<T> {
    /// Binds `subset` to `(set, topology)`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidSubset`](crate::Error::InvalidSubset) if `subset ⊄ set`;
    /// [`Error::InvalidTopology`](crate::Error::InvalidTopology) if `topology`
    /// is not a topology on `set`.
    pub fn new(set: Set<T>, subset: Set<T>, topology: Topology<T>) -> Result<Self> {
        ensure_subset(&subset, &set)?;
        ensure_topology(&topology, &set)?;
        Ok(Self {
            set,
            subset,
            topology,
        })
    }

    /// Skips validation; callers must have checked both invariants.
    pub(crate) fn new_unchecked(set: Set<T>, subset: Set<T>, topology: Topology<T>) -> Self {
        Self {
            set,
            subset,
            topology,
        }
    }

    pub fn set(&self) -> &Set<T> {
        &self.set
    }

    pub fn subset(&self) -> &Set<T> {
        &self.subset
    }

    pub fn topology(&self) -> &Topology<T> {
        &self.topology
    }

    /// Points every open neighbourhood of which meets the subset at another point.
    ///
    /// An isolated point (`{p} ∈ τ`) is never a limit point.
    pub fn limit_points(&self) -> Set<T> {
        self.set
            .iter()
            .filter(|point| {
                self.topology
                    .iter()
                    .filter(|open| open.contains(point))
                    .all(|open| {
                        let punctured = open.without(point);
                        !punctured.is_empty() && !punctured.is_disjoint(&self.subset)
                    })
            })
            .cloned()
            .collect()
    }

    /// The smallest closed set containing the subset.
    pub fn closure_points(&self) -> Set<T> {
        // X is the complement of ∅, so the fold starts from a closed superset.
        self.topology
            .iter()
            .map(|open| self.set.difference(open))
            .filter(|closed| self.subset.is_subset(closed))
            .fold(self.set.clone(), |acc, closed| acc.intersection(&closed))
    }

    /// The largest open set contained in the subset.
    pub fn interior_points(&self) -> Set<T> {
        self.topology
            .iter()
            .filter(|open| open.is_subset(&self.subset))
            .fold(Set::new(), |acc, open| acc.union(open))
    }

    pub fn exterior_points(&self) -> Set<T> {
        self.set.difference(&self.closure_points())
    }

    pub fn boundary_points(&self) -> Set<T> {
        self.closure_points().difference(&self.interior_points())
    }

    /// `|interior| / |closure|`.
    ///
    /// The closure is empty only for `A = ∅`, where the ratio is `0 / 0` and
    /// the result is NaN. JSON exports write it as `null`.
    pub fn accuracy(&self) -> f64 {
        let closure = self.closure_points().len();
        if closure == 0 {
            return f64::NAN;
        }
        self.interior_points().len() as f64 / closure as f64
    }
}
