// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Set algebra: power sets and closed complements.

use crate::error::{Error, Result};
use crate::set::{Element, Set, Topology};

/// Largest ground set [`power_set`] accepts.
pub const MAX_POWER_SET_ELEMENTS: usize = 32;

/// Returns every subset of `set`, including `∅` and `set` itself.
///
/// Each element gets a fixed bit index (the set's iteration order); subset
/// `i` holds the elements whose bit is set in `i` for `i` in `[0, 2^n)`:
///
/// ```text
/// S = {a, b, c}:  000 001 010 011   100 101   110   111
///                 {}  {a} {b} {a,b} {c} {a,c} {b,c} S
/// ```
///
/// # Errors
///
/// [`Error::CapacityExceeded`] when `set` has more than
/// [`MAX_POWER_SET_ELEMENTS`] elements.
pub fn power_set<T: Element>(set: &Set<T>) -> Result<Topology<T>> {
    let n = set.len();
    if n > MAX_POWER_SET_ELEMENTS {
        tracing::trace!(elements = n, "power set refused");
        return Err(Error::capacity("power set", MAX_POWER_SET_ELEMENTS, n));
    }

    let elements: Vec<T> = set.iter().cloned().collect();
    let count = 1u64 << n;
    tracing::debug!(elements = n, subsets = count, "building power set");

    Ok((0..count).map(|mask| subset_for_mask(&elements, mask)).collect())
}

/// Collects the items whose bit is set in `mask`.
pub(crate) fn subset_for_mask<T: Element>(items: &[T], mask: u64) -> Set<T> {
    items
        .iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1u64 << bit) != 0)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Returns `set − subset`, the closed set complementing an open one.
///
/// # Errors
///
/// [`Error::InvalidSubset`] when `subset` is not contained in `set`.
pub fn closed_complement<T: Element>(set: &Set<T>, subset: &Set<T>) -> Result<Set<T>> {
    if !subset.is_subset(set) {
        return Err(Error::InvalidSubset);
    }
    Ok(set.difference(subset))
}
