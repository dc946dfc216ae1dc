// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FinTopo Core
//!
//! Enumeration and analysis of topologies on finite sets.
//!
//! Given a finite ground set `X` this crate can:
//!
//! - list every subset of `X` ([`power_set`]),
//! - decide whether a family of subsets is a topology on `X` ([`is_topology`]),
//! - enumerate every topology on `X` by brute force ([`topologies`]), with
//!   cooperative cancellation and progress reporting ([`topologies_with`]),
//! - resolve the neighbourhood system of a point ([`neighbourhood_system`]),
//! - compute the limit, closure, interior, exterior and boundary points of a
//!   subset, and its accuracy ([`SubsetCategories`]).
//!
//! All results are fresh values; no function mutates its inputs, so
//! concurrent calls on different inputs are independent.
//!
//! ## Example
//!
//! ```
//! use fintopo_core::{is_topology, power_set, Set};
//!
//! let set = Set::from(['a', 'b', 'c']);
//! let discrete = power_set(&set).unwrap();
//! assert_eq!(discrete.len(), 8);
//! assert!(is_topology(&discrete, &set));
//! ```

pub mod algebra;
pub mod categories;
pub mod config;
pub mod control;
pub mod enumerator;
pub mod error;
pub mod neighbourhood;
pub mod report;
pub mod set;
pub mod validator;

pub use algebra::{closed_complement, power_set, MAX_POWER_SET_ELEMENTS};
pub use categories::SubsetCategories;
pub use config::EnumerationConfig;
pub use control::{CancellationToken, EnumerationControl, ProgressSink};
pub use enumerator::{
    count_topologies, par_topologies, topologies, topologies_sorted, topologies_sorted_with,
    topologies_with, Topologies, MAX_ENUMERATION_ELEMENTS, MAX_SORTED_ELEMENTS,
};
pub use error::{Error, Result};
pub use neighbourhood::{minimal_open_set, neighbourhood_system};
pub use report::{
    render_sorted, subset_table, to_json, topology_rows, SubsetReport, TopologyRow,
};
pub use set::{Element, Set, Topology};
pub use validator::is_topology;
