// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for arrangement generation.
//!
//! Every error is reported by the call that builds a producer, before the
//! first arrangement is pulled. Iteration itself never fails.

use crate::family::{Family, Strategy};
use thiserror::Error;

/// Errors that can occur when requesting arrangements or digit vectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrangementError {
    /// An argument has a value that can never be valid (empty source, base below 2).
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: &'static str,
    },

    /// The requested length exceeds the source size for a family without replacement.
    #[error("`{parameter}` is {length} but only {size} distinct source slots are available")]
    OutOfRange {
        parameter: &'static str,
        length: usize,
        size: usize,
    },

    /// The family has no generation rule for the requested strategy.
    #[error("{family} cannot be generated with the {strategy} strategy")]
    UnsupportedStrategy { family: Family, strategy: Strategy },
}

impl ArrangementError {
    /// Name of the offending parameter, if the error is about a single argument.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            ArrangementError::InvalidArgument { parameter, .. }
            | ArrangementError::OutOfRange { parameter, .. } => Some(parameter),
            ArrangementError::UnsupportedStrategy { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ArrangementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names() {
        let invalid = ArrangementError::InvalidArgument {
            parameter: "source",
            reason: "must not be empty",
        };
        assert_eq!(invalid.parameter(), Some("source"));

        let out_of_range = ArrangementError::OutOfRange {
            parameter: "length",
            length: 3,
            size: 2,
        };
        assert_eq!(out_of_range.parameter(), Some("length"));

        let unsupported = ArrangementError::UnsupportedStrategy {
            family: Family::SortedSequences,
            strategy: Strategy::Direct,
        };
        assert_eq!(unsupported.parameter(), None);
    }

    #[test]
    fn test_display() {
        let error = ArrangementError::OutOfRange {
            parameter: "length",
            length: 3,
            size: 2,
        };
        assert_eq!(
            error.to_string(),
            "`length` is 3 but only 2 distinct source slots are available"
        );

        let error = ArrangementError::UnsupportedStrategy {
            family: Family::SortedSequences,
            strategy: Strategy::Direct,
        };
        assert_eq!(
            error.to_string(),
            "SortedSequences cannot be generated with the Direct strategy"
        );
    }
}
