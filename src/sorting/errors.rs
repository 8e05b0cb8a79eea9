//! Error types for trace generation
//!
//! Generation is a pure, synchronous computation, so every error here is a
//! caller contract violation detected before any step is recorded. A trace is
//! either returned whole or not at all.

use super::algorithm::Algorithm;
use std::fmt;

/// Errors that can occur while generating a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Algorithm identifier is not one of the supported algorithms
    UnknownAlgorithm { name: String },

    /// Negative value given to an algorithm that buckets by value
    InvalidInputDomain {
        algorithm: Algorithm,
        index: usize,
        value: i32,
    },

    /// Maximum value exceeds the bucket array ceiling
    ValueOutOfRange {
        algorithm: Algorithm,
        value: i32,
        limit: i32,
    },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::UnknownAlgorithm { name } => {
                write!(f, "Unknown algorithm '{}'", name)
            }
            SortError::InvalidInputDomain {
                algorithm,
                index,
                value,
            } => {
                write!(
                    f,
                    "{} requires non-negative values, found {} at index {}",
                    algorithm.name(),
                    value,
                    index
                )
            }
            SortError::ValueOutOfRange {
                algorithm,
                value,
                limit,
            } => {
                write!(
                    f,
                    "{} supports values up to {}, found {}",
                    algorithm.name(),
                    limit,
                    value
                )
            }
        }
    }
}

impl std::error::Error for SortError {}
