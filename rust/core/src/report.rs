// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row-oriented results for tabular renderers and exporters.
//!
//! Front ends display `(index, value)` rows and spreadsheet exporters write
//! the same rows; this module produces them, plus JSON via `serde_json`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algebra::power_set;
use crate::categories::SubsetCategories;
use crate::error::Result;
use crate::set::{Element, Set, Topology};
use crate::validator::ensure_topology;

/// Every point category of one subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Eq + std::hash::Hash"
))]
pub struct SubsetReport<T> {
    /// 1-based row number.
    pub index: usize,
    pub subset: Set<T>,
    pub limit: Set<T>,
    pub closure: Set<T>,
    pub interior: Set<T>,
    pub exterior: Set<T>,
    pub boundary: Set<T>,
    pub accuracy: f64,
}

impl<T: Element> SubsetReport<T> {
    fn from_categories(index: usize, categories: &SubsetCategories<T>) -> Self {
        Self {
            index,
            subset: categories.subset().clone(),
            limit: categories.limit_points(),
            closure: categories.closure_points(),
            interior: categories.interior_points(),
            exterior: categories.exterior_points(),
            boundary: categories.boundary_points(),
            accuracy: categories.accuracy(),
        }
    }
}

/// Computes the point categories of every subset of `set` under `topology`.
///
/// The topology is validated once; rows follow the power set's order.
///
/// # Errors
///
/// [`Error::InvalidTopology`](crate::Error::InvalidTopology) or
/// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) from the power set.
pub fn subset_table<T: Element>(
    set: &Set<T>,
    topology: &Topology<T>,
) -> Result<Vec<SubsetReport<T>>> {
    ensure_topology(topology, set)?;

    let rows = power_set(set)?
        .into_iter()
        .enumerate()
        .map(|(i, subset)| {
            let categories =
                SubsetCategories::new_unchecked(set.clone(), subset, topology.clone());
            SubsetReport::from_categories(i + 1, &categories)
        })
        .collect();
    Ok(rows)
}

/// One listed topology, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyRow {
    /// 1-based row number.
    pub index: usize,
    pub topology: String,
}

/// Numbers and renders topologies in the given order.
pub fn topology_rows<T>(topologies: &[Topology<T>]) -> Vec<TopologyRow>
where
    T: Element + Ord + fmt::Display,
{
    topologies
        .iter()
        .enumerate()
        .map(|(i, t)| TopologyRow {
            index: i + 1,
            topology: render_sorted(t),
        })
        .collect()
}

/// Renders a family as `{{}, {a}, {a, b}}` independent of hash order.
///
/// Members are ordered by size, then lexicographically by their sorted
/// elements; the elements of each member are ascending.
pub fn render_sorted<T>(family: &Topology<T>) -> String
where
    T: Element + Ord + fmt::Display,
{
    let mut members: Vec<Vec<T>> = family.iter().map(Set::to_sorted_vec).collect();
    members.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let rendered: Vec<String> = members
        .iter()
        .map(|m| {
            let items: Vec<String> = m.iter().map(ToString::to_string).collect();
            format!("{{{}}}", items.join(", "))
        })
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

/// Serializes rows to pretty-printed JSON.
pub fn to_json<R: Serialize>(rows: &[R]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::topologies_sorted;

    fn space() -> (Set<char>, Topology<char>) {
        let set = Set::from(['a', 'b', 'c', 'd']);
        let t: Topology<char> = [
            Set::new(),
            Set::from(['a']),
            Set::from(['b', 'c']),
            Set::from(['a', 'b', 'c']),
            set.clone(),
        ]
        .into();
        (set, t)
    }

    #[test]
    fn one_row_per_subset() {
        let (set, t) = space();
        let rows = subset_table(&set, &t).unwrap();
        assert_eq!(rows.len(), 16);
        assert_eq!(
            rows.iter().map(|r| r.index).collect::<Vec<_>>(),
            (1..=16).collect::<Vec<_>>()
        );

        let row = rows
            .iter()
            .find(|r| r.subset == Set::from(['b', 'd']))
            .unwrap();
        assert_eq!(row.closure, Set::from(['b', 'c', 'd']));
        assert_eq!(row.exterior, Set::from(['a']));
    }

    #[test]
    fn exterior_is_complement_of_closure_in_every_row() {
        let (set, t) = space();
        for row in subset_table(&set, &t).unwrap() {
            assert_eq!(row.exterior, set.difference(&row.closure));
            assert!(row.interior.is_subset(&row.subset));
            assert!(row.subset.is_subset(&row.closure));
        }
    }

    #[test]
    fn invalid_topology_is_rejected() {
        let set = Set::from(['a', 'b']);
        let t: Topology<char> = [Set::from(['a'])].into();
        assert_eq!(subset_table(&set, &t).unwrap_err(), Error::InvalidTopology);
    }

    #[test]
    fn topology_rows_are_numbered() {
        let sorted = topologies_sorted(&Set::from(['x'])).unwrap();
        let rows = topology_rows(&sorted);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].index, 1);
        assert!(rows[0].topology.starts_with('{'));
    }

    #[test]
    fn equal_topologies_render_identically() {
        let forward: Topology<char> =
            [Set::new(), Set::from(['a']), Set::from(['a', 'b'])].into();
        let backward: Topology<char> =
            [Set::from(['b', 'a']), Set::from(['a']), Set::new()].into();

        assert_eq!(render_sorted(&forward), "{{}, {a}, {a, b}}");
        assert_eq!(render_sorted(&forward), render_sorted(&backward));

        let rows = topology_rows(&[backward]);
        assert_eq!(rows[0].topology, "{{}, {a}, {a, b}}");
    }

    #[test]
    fn same_size_members_order_by_elements() {
        let t: Topology<u8> = [Set::from([3, 4]), Set::from([1, 2]), Set::new()].into();
        assert_eq!(render_sorted(&t), "{{}, {1, 2}, {3, 4}}");
    }

    #[test]
    fn json_has_expected_fields() {
        let set = Set::from(['a']);
        let t: Topology<char> = [Set::new(), set.clone()].into();
        let rows = subset_table(&set, &t).unwrap();

        let json = to_json(&rows).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value.as_array().unwrap()[0];
        for field in ["index", "subset", "limit", "closure", "interior", "exterior", "boundary", "accuracy"] {
            assert!(first.get(field).is_some(), "missing {field}");
        }
    }

    #[test]
    fn empty_subset_accuracy_is_null_in_json() {
        let (set, t) = space();
        let rows = subset_table(&set, &t).unwrap();

        let empty = rows.iter().find(|r| r.subset.is_empty()).unwrap();
        assert!(empty.accuracy.is_nan());

        let value: serde_json::Value = serde_json::from_str(&to_json(&rows).unwrap()).unwrap();
        let json_empty = value
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["subset"].as_array().is_some_and(Vec::is_empty))
            .unwrap();
        assert!(json_empty["accuracy"].is_null());
        assert_eq!(json_empty["index"], serde_json::json!(empty.index));

        let full = value
            .as_array()
            .unwrap()
            .iter()
            .find(|row| row["subset"].as_array().is_some_and(|s| s.len() == 4))
            .unwrap();
        assert_eq!(full["accuracy"], serde_json::json!(1.0));
    }
}
