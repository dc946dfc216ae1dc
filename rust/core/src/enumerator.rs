// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exhaustive enumeration of every topology on a small finite set.
//!
//! The search walks the power set of the power set. `∅` and `X` belong to
//! every topology, so they are removed from the choice and re-added to each
//! candidate; that leaves `m = 2^n − 2` optional members and `2^m`
//! candidates, each indexed by a bit mask:
//!
//! | n | candidates | topologies |
//! |---|-----------:|-----------:|
//! | 1 |          1 |          1 |
//! | 2 |          4 |          4 |
//! | 3 |         64 |         29 |
//! | 4 |     16 384 |        355 |
//! | 5 | 1 073 741 824 |    6 942 |
//!
//! There is no known closed formula for the number of topologies on `n`
//! points, so brute force is the reference algorithm.

use std::iter::FusedIterator;
use std::time::Instant;

use rayon::prelude::*;

use crate::algebra::{power_set, subset_for_mask};
use crate::config::EnumerationConfig;
use crate::control::{CancellationToken, EnumerationControl};
use crate::error::{Error, Result};
use crate::set::{Element, Set, Topology};
use crate::validator::is_topology;

/// Largest ground set the enumerator accepts (`2^5 − 2 = 30` mask bits).
pub const MAX_ENUMERATION_ELEMENTS: usize = 5;

/// Largest ground set accepted by the sorted (fully materialized) listing.
pub const MAX_SORTED_ELEMENTS: usize = 4;

/// The optional members of a candidate family and the size of the mask space.
#[derive(Debug)]
struct CandidateSpace<T> {
    set: Set<T>,
    members: Vec<Set<T>>,
    total: u64,
}

impl<T: Element> CandidateSpace<T> {
    fn new(set: &Set<T>) -> Result<Self> {
        let n = set.len();
        if n > MAX_ENUMERATION_ELEMENTS {
            tracing::trace!(elements = n, "topology enumeration refused");
            return Err(Error::capacity(
                "topology enumeration",
                MAX_ENUMERATION_ELEMENTS,
                n,
            ));
        }

        let members: Vec<Set<T>> = power_set(set)?
            .into_iter()
            .filter(|s| !s.is_empty() && s != set)
            .collect();
        let total = 1u64 << members.len();

        tracing::debug!(
            elements = n,
            optional_members = members.len(),
            candidates = total,
            "starting topology enumeration"
        );

        Ok(Self {
            set: set.clone(),
            members,
            total,
        })
    }

    /// Builds candidate `mask` and returns it if it satisfies the axioms.
    fn check(&self, mask: u64) -> Option<Topology<T>> {
        let mut candidate = subset_for_mask(&self.members, mask);
        candidate.extend([Set::new(), self.set.clone()]);
        is_topology(&candidate, &self.set).then_some(candidate)
    }

    /// Sequentially checks masks in `start..end`.
    fn scan(
        &self,
        start: u64,
        end: u64,
        token: Option<&CancellationToken>,
    ) -> Result<Vec<Topology<T>>> {
        let mut found = Vec::new();
        for mask in start..end {
            if token.is_some_and(CancellationToken::is_cancelled) {
                return Err(Error::Cancelled);
            }
            if let Some(topology) = self.check(mask) {
                found.push(topology);
            }
        }
        Ok(found)
    }

    fn percent(&self, mask: u64) -> f64 {
        mask as f64 / self.total as f64 * 100.0
    }
}

/// Lazy sequence of the topologies on a set, in bit-counter order.
///
/// Yields `Ok(topology)` for each discovery. If the control's token is
/// cancelled, the next call yields a single `Err(Error::Cancelled)` and the
/// sequence ends. Restart by calling [`topologies`] again.
#[derive(Debug)]
pub struct Topologies<T> {
    space: CandidateSpace<T>,
    next: u64,
    found: usize,
    control: EnumerationControl,
    started: Instant,
    done: bool,
}

impl<T> Topologies<T> {
    /// Number of candidate families the sweep will test.
    pub fn candidates(&self) -> u64 {
        self.space.total
    }

    /// Topologies yielded so far.
    pub fn found(&self) -> usize {
        self.found
    }
}

impl<T: Element> Iterator for Topologies<T> {
    type Item = Result<Topology<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            if self.control.is_cancelled() {
                self.done = true;
                self.control.report(0.0);
                tracing::info!(
                    found = self.found,
                    checked = self.next,
                    "topology enumeration cancelled"
                );
                return Some(Err(Error::Cancelled));
            }

            if self.next >= self.space.total {
                self.done = true;
                self.control.report(100.0);
                self.control.report(0.0);
                tracing::info!(
                    found = self.found,
                    elapsed_ms = self.started.elapsed().as_millis() as u64,
                    "topology enumeration complete"
                );
                return None;
            }

            let mask = self.next;
            self.next += 1;

            if mask % self.control.interval() == 0 {
                let percent = self.space.percent(mask);
                self.control.report(percent);
            }

            if let Some(topology) = self.space.check(mask) {
                self.found += 1;
                return Some(Ok(topology));
            }
        }
    }
}

impl<T: Element> FusedIterator for Topologies<T> {}

/// Lazily enumerates every topology on `set`.
///
/// # Example
///
/// ```
/// use fintopo_core::{topologies, Set};
///
/// let set = Set::from(['a', 'b', 'c']);
/// let count = topologies(&set).unwrap().filter(Result::is_ok).count();
/// assert_eq!(count, 29);
/// ```
///
/// # Errors
///
/// [`Error::CapacityExceeded`] when `set` has more than
/// [`MAX_ENUMERATION_ELEMENTS`] elements. The check happens before any work.
pub fn topologies<T: Element>(set: &Set<T>) -> Result<Topologies<T>> {
    topologies_with(set, EnumerationControl::new())
}

/// Like [`topologies`], with cancellation and progress reporting.
///
/// Progress is reported every `control`'s interval iterations, then `100`
/// and `0` on completion, or `0` on cancellation.
pub fn topologies_with<T: Element>(
    set: &Set<T>,
    control: EnumerationControl,
) -> Result<Topologies<T>> {
    let space = CandidateSpace::new(set)?;
    Ok(Topologies {
        space,
        next: 0,
        found: 0,
        control,
        started: Instant::now(),
        done: false,
    })
}

/// Every topology on `set`, ordered by increasing number of open sets.
///
/// Ties keep the bit-counter discovery order.
///
/// # Errors
///
/// [`Error::CapacityExceeded`] when `set` has more than
/// [`MAX_SORTED_ELEMENTS`] elements.
pub fn topologies_sorted<T: Element>(set: &Set<T>) -> Result<Vec<Topology<T>>> {
    topologies_sorted_with(set, EnumerationControl::new())
}

/// Like [`topologies_sorted`], with cancellation and progress reporting.
///
/// A cancelled run returns [`Error::Cancelled`] and no partial list.
pub fn topologies_sorted_with<T: Element>(
    set: &Set<T>,
    control: EnumerationControl,
) -> Result<Vec<Topology<T>>> {
    let n = set.len();
    if n > MAX_SORTED_ELEMENTS {
        return Err(Error::capacity(
            "sorted topology enumeration",
            MAX_SORTED_ELEMENTS,
            n,
        ));
    }

    let mut all = topologies_with(set, control)?.collect::<Result<Vec<_>>>()?;
    all.sort_by_key(|t| t.len());
    Ok(all)
}

/// Counts the topologies on `set` without keeping them.
pub fn count_topologies<T: Element>(set: &Set<T>) -> Result<usize> {
    topologies(set)?.try_fold(0, |count, t| t.map(|_| count + 1))
}

/// Enumerates on a rayon pool, splitting the mask space into chunks.
///
/// Returns the same topologies in the same order as the sequential sweep.
/// The token is checked before every candidate.
pub fn par_topologies<T>(
    set: &Set<T>,
    token: Option<&CancellationToken>,
    config: &EnumerationConfig,
) -> Result<Vec<Topology<T>>>
where
    T: Element + Send + Sync,
{
    let space = CandidateSpace::new(set)?;
    let chunk = config.chunk_size.max(1);
    let chunks = space.total.div_ceil(chunk);
    let started = Instant::now();

    let run = || -> Result<Vec<Topology<T>>> {
        let per_chunk = (0..chunks)
            .into_par_iter()
            .map(|c| {
                let start = c * chunk;
                let end = (start + chunk).min(space.total);
                space.scan(start, end, token)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(per_chunk.into_iter().flatten().collect())
    };

    let result = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build()
    {
        Ok(pool) => pool.install(run),
        Err(err) => {
            tracing::warn!(error = %err, "falling back to the global rayon pool");
            run()
        }
    };

    match &result {
        Ok(found) => tracing::info!(
            found = found.len(),
            chunks,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "parallel topology enumeration complete"
        ),
        Err(Error::Cancelled) => tracing::info!("parallel topology enumeration cancelled"),
        Err(_) => {}
    }
    result
}
