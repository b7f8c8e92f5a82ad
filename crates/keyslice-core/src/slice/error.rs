use crate::{slice::Direction, value::ComponentTypeError};
use std::fmt;
use thiserror::Error as ThisError;

///
/// SliceQueryError
///
/// Input-validation failures raised while resolving a slice query.
/// All are synchronous and non-retryable; the first one found aborts.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SliceQueryError {
    #[error(
        "key tuple for '{owner}' has a hole: component {index} is set after an absent component"
    )]
    HoleInKeyTuple { owner: String, index: usize },

    #[error("{0}")]
    RangeShape(#[from] RangeShapeError),

    #[error("component {index} of the start must not sort after the end for {direction} order")]
    Ordering { index: usize, direction: Direction },

    #[error("{0}")]
    PartitionKey(#[from] PartitionKeyError),

    #[error("{0}")]
    ComponentType(#[from] ComponentTypeError),
}

///
/// RangeShapeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RangeShapeError {
    #[error(
        "no more than one component of difference is allowed between the start and end of a range (start ends at {start}, end ends at {end})"
    )]
    ComponentCountDivergence { start: usize, end: usize },

    #[error("component {index} must be identical between start and end")]
    PrefixMismatch { index: usize },

    #[error("start and end key tuples must have the same arity (start {start}, end {end})")]
    ArityMismatch { start: usize, end: usize },
}

///
/// PartitionKeyError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PartitionKeyError {
    #[error("partition key component {index} must be set on the {side} of a slice")]
    Missing { side: TupleSide, index: usize },

    #[error("partition key component {index} must be identical between start and end")]
    Mismatch { index: usize },

    #[error(
        "partition key length {partition_len} is out of range for key tuples of arity {arity}"
    )]
    InvalidLength { partition_len: usize, arity: usize },
}

///
/// TupleSide
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TupleSide {
    Start,
    End,
}

impl fmt::Display for TupleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Start => "start",
            Self::End => "end",
        };
        write!(f, "{label}")
    }
}
