// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for finite topology operations.

/// Result type alias for finite topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating or analysing topologies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is too large for the bit-indexing scheme of the operation.
    #[error("{operation} supports sets of at most {limit} elements, got {actual}")]
    CapacityExceeded {
        operation: &'static str,
        limit: usize,
        actual: usize,
    },

    /// A subset argument contains elements outside its claimed superset.
    #[error("the given subset is not a valid subset of the set")]
    InvalidSubset,

    /// A family of subsets fails the topology axioms on the given set.
    #[error("the given topology is not a valid topology on the set")]
    InvalidTopology,

    /// The point is not a member of the ground set.
    #[error("the set does not contain the point")]
    PointNotInSet,

    /// Cooperative cancellation was requested while enumerating.
    #[error("operation cancelled")]
    Cancelled,

    /// Serialization of a result failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// True when the operation ended early because the caller asked it to.
    ///
    /// Callers normally present this as "stopped", not as a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// True for errors caused by malformed arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidSubset | Error::InvalidTopology | Error::PointNotInSet
        )
    }

    /// True when the input exceeded an operation's size limit.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Error::CapacityExceeded { .. })
    }

    pub(crate) fn capacity(operation: &'static str, limit: usize, actual: usize) -> Self {
        Error::CapacityExceeded {
            operation,
            limit,
            actual,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_are_disjoint() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::Cancelled.is_invalid_argument());
        assert!(Error::InvalidTopology.is_invalid_argument());
        assert!(Error::PointNotInSet.is_invalid_argument());
        assert!(Error::capacity("power set", 32, 33).is_capacity());
        assert!(!Error::InvalidSubset.is_capacity());
    }

    #[test]
    fn capacity_message_names_operation() {
        let err = Error::capacity("topology enumeration", 5, 6);
        assert_eq!(
            err.to_string(),
            "topology enumeration supports sets of at most 5 elements, got 6"
        );
    }
}
