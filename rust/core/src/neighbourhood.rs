// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Neighbourhood systems of points.
//!
//! If `(X, τ)` is a topological space and `p ∈ X`, a neighbourhood of `p` is
//! any `N ⊆ X` that includes an open set `O` with `p ∈ O ⊆ N`. The
//! neighbourhood system of `p` is the family of all its neighbourhoods.
//!
//! In a finite space the open sets containing `p` are closed under
//! intersection, so they have a least element, the minimal open
//! neighbourhood `U_p`, and the neighbourhood system is exactly the set of
//! supersets of `U_p`.

use crate::algebra::power_set;
use crate::error::{Error, Result};
use crate::set::{Element, Set, Topology};
use crate::validator::ensure_topology;

/// Returns the smallest open set containing `point`.
///
/// # Errors
///
/// [`Error::InvalidTopology`] if `topology` is not a topology on `set`;
/// [`Error::PointNotInSet`] if `point ∉ set`.
pub fn minimal_open_set<T: Element>(
    set: &Set<T>,
    topology: &Topology<T>,
    point: &T,
) -> Result<Set<T>> {
    ensure_topology(topology, set)?;
    if !set.contains(point) {
        return Err(Error::PointNotInSet);
    }
    Ok(smallest_open_containing(topology, point))
}

/// Returns every subset of `set` that is a neighbourhood of `point`.
///
/// # Example
///
/// ```
/// use fintopo_core::{neighbourhood_system, Set, Topology};
///
/// let set = Set::from(['a', 'b']);
/// let t: Topology<char> = [Set::new(), Set::from(['a']), set.clone()].into();
///
/// let system = neighbourhood_system(&set, &t, &'b').unwrap();
/// let expected: Topology<char> = [set.clone()].into();
/// assert_eq!(system, expected);
/// ```
///
/// # Errors
///
/// [`Error::InvalidTopology`] if `topology` is not a topology on `set`;
/// [`Error::PointNotInSet`] if `point ∉ set`; [`Error::CapacityExceeded`]
/// if `set` is too large for [`power_set`].
pub fn neighbourhood_system<T: Element>(
    set: &Set<T>,
    topology: &Topology<T>,
    point: &T,
) -> Result<Topology<T>> {
    let minimal = minimal_open_set(set, topology, point)?;
    Ok(power_set(set)?
        .into_iter()
        .filter(|candidate| minimal.is_subset(candidate))
        .collect())
}

/// Intersects the open sets containing `point` into a fresh set.
///
/// # Panics
///
/// If no member of `topology` contains `point`. A validated topology always
/// contains the ground set, so this means the validator let a bad input through.
fn smallest_open_containing<T: Element>(topology: &Topology<T>, point: &T) -> Set<T> {
    let mut containing = topology.iter().filter(|open| open.contains(point));
    let first = containing
        .next()
        .expect("validated topology has no open set containing the point");
    containing.fold(first.clone(), |acc, open| acc.intersection(open))
}
