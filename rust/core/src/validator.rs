// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology axiom checking.
//!
//! A family `τ` of subsets of `X` is a topology on `X` if:
//!
//! 1. `∅ ∈ τ` and `X ∈ τ`,
//! 2. `τ` is closed under unions,
//! 3. `τ` is closed under finite intersections.
//!
//! On a finite set, pairwise closure implies closure under arbitrary unions
//! and intersections, so checking every ordered pair is sufficient.

use crate::error::{Error, Result};
use crate::set::{Element, Set, Topology};

/// Returns `true` if `candidate` is a topology on `set`.
///
/// Membership is tested by set equality. Every ordered pair of members is
/// checked, self-pairs included, and the check stops at the first failure.
/// Runs in `O(|candidate|²)` set operations.
pub fn is_topology<T: Element>(candidate: &Topology<T>, set: &Set<T>) -> bool {
    if !candidate.contains(&Set::new()) || !candidate.contains(set) {
        return false;
    }

    candidate.iter().all(|e1| {
        candidate.iter().all(|e2| {
            candidate.contains(&e1.union(e2)) && candidate.contains(&e1.intersection(e2))
        })
    })
}

/// Fails with [`Error::InvalidTopology`] unless `topology` is a topology on `set`.
pub(crate) fn ensure_topology<T: Element>(topology: &Topology<T>, set: &Set<T>) -> Result<()> {
    if is_topology(topology, set) {
        Ok(())
    } else {
        tracing::trace!(members = topology.len(), "rejected invalid topology");
        Err(Error::InvalidTopology)
    }
}

/// Fails with [`Error::InvalidSubset`] unless `subset ⊆ set`.
pub(crate) fn ensure_subset<T: Element>(subset: &Set<T>, set: &Set<T>) -> Result<()> {
    if subset.is_subset(set) {
        Ok(())
    } else {
        tracing::trace!("rejected subset outside the ground set");
        Err(Error::InvalidSubset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::power_set;

    fn family(members: &[&[char]]) -> Topology<char> {
        members
            .iter()
            .map(|m| m.iter().copied().collect::<Set<char>>())
            .collect()
    }

    #[test]
    fn discrete_topology_is_valid() {
        for n in 0..=4u8 {
            let set: Set<u8> = (0..n).collect();
            let discrete = power_set(&set).unwrap();
            assert!(is_topology(&discrete, &set));
        }
    }

    #[test]
    fn indiscrete_topology_is_valid() {
        let set = Set::from(['a', 'b', 'c']);
        let indiscrete: Topology<char> = [Set::new(), set.clone()].into();
        assert!(is_topology(&indiscrete, &set));
    }

    #[test]
    fn missing_empty_set_or_ground_set_fails() {
        let set = Set::from(['a', 'b']);
        assert!(!is_topology(&family(&[&['a', 'b'], &['a']]), &set));
        assert!(!is_topology(&family(&[&[], &['a']]), &set));
    }

    #[test]
    fn not_closed_under_union() {
        let set = Set::from(['a', 'b', 'c']);
        let t = family(&[&[], &['a'], &['b'], &['a', 'b', 'c']]);
        assert!(!is_topology(&t, &set));
    }

    #[test]
    fn not_closed_under_intersection() {
        let set = Set::from(['a', 'b', 'c']);
        let t = family(&[&[], &['a', 'b'], &['b', 'c'], &['a', 'b', 'c']]);
        assert!(!is_topology(&t, &set));
    }

    #[test]
    fn known_topology_is_valid() {
        let set = Set::from(['a', 'b', 'c', 'd']);
        let t = family(&[&[], &['a'], &['b', 'c'], &['a', 'b', 'c'], &['a', 'b', 'c', 'd']]);
        assert!(is_topology(&t, &set));
    }

    #[test]
    fn ensure_helpers_map_to_errors() {
        let set = Set::from([1, 2]);
        let bad: Topology<i32> = [Set::from([1])].into();
        assert_eq!(ensure_topology(&bad, &set), Err(Error::InvalidTopology));
        assert_eq!(ensure_subset(&Set::from([3]), &set), Err(Error::InvalidSubset));
        assert_eq!(ensure_subset(&Set::from([2]), &set), Ok(()));
    }
}
