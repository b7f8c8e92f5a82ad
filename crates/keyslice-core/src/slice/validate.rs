use crate::{
    slice::{
        Direction, KeyTuple, PartitionKeyError, RangeShapeError, SliceQuery, SliceQueryError,
        TupleSide,
    },
    value::{ComponentTypeError, Value, components_equal, ordered_cmp},
};
use std::cmp::Ordering;

///
/// RangeIndices
///
/// Last present index of the start and end tuples of a validated slice.
/// Only produced by [`validate_range`], so `start.abs_diff(end) <= 1` holds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RangeIndices {
    pub start: usize,
    pub end: usize,
}

impl RangeIndices {
    #[must_use]
    pub const fn min(self) -> usize {
        if self.start < self.end {
            self.start
        } else {
            self.end
        }
    }

    #[must_use]
    pub const fn max(self) -> usize {
        if self.start > self.end {
            self.start
        } else {
            self.end
        }
    }
}

/// Validate the structural and ordering invariants between the start and
/// end of a slice.
///
/// Rules run in a fixed order and the first violation aborts:
/// 1. partition key fully present and identical on both sides
/// 2. no holes in either tuple
/// 3. last present indices differ by at most one
/// 4. clustering components before the last index are identical
/// 5. a lone trailing bound has an orderable kind
/// 6. a shared clustering last index respects the requested direction
pub fn validate_range(query: &SliceQuery) -> Result<RangeIndices, SliceQueryError> {
    validate_partition_key(query)?;

    let start = last_present_index(query.start(), TupleSide::Start)?;
    let end = last_present_index(query.end(), TupleSide::End)?;
    let indices = RangeIndices { start, end };

    if start.abs_diff(end) > 1 {
        return Err(RangeShapeError::ComponentCountDivergence { start, end }.into());
    }

    validate_shared_prefix(query, indices)?;

    if start != end {
        validate_trailing_kind(query, indices)?;
    } else if start >= query.partition_len() {
        validate_direction(query, start)?;
    }

    Ok(indices)
}

fn validate_partition_key(query: &SliceQuery) -> Result<(), SliceQueryError> {
    for index in 0..query.partition_len() {
        let start = present(query.start(), index, TupleSide::Start)?;
        let end = present(query.end(), index, TupleSide::End)?;

        if !components_equal(start, end) {
            return Err(PartitionKeyError::Mismatch { index }.into());
        }
    }

    Ok(())
}

// Partition components are present once validated, so "no last index"
// only happens for a zero-length partition, which the builder rejects.
fn last_present_index(tuple: &KeyTuple, side: TupleSide) -> Result<usize, SliceQueryError> {
    tuple
        .last_non_null_index()?
        .ok_or(SliceQueryError::PartitionKey(PartitionKeyError::Missing {
            side,
            index: 0,
        }))
}

fn validate_shared_prefix(query: &SliceQuery, indices: RangeIndices) -> Result<(), SliceQueryError> {
    for index in query.partition_len()..indices.max() {
        let (Some(start), Some(end)) = (query.start().component(index), query.end().component(index))
        else {
            return Err(RangeShapeError::PrefixMismatch { index }.into());
        };

        if ordered_cmp(start, end)? != Ordering::Equal {
            return Err(RangeShapeError::PrefixMismatch { index }.into());
        }
    }

    Ok(())
}

// With diverging indices the longer tuple's last component is the only
// bound, so nothing else compares it against a value.
fn validate_trailing_kind(query: &SliceQuery, indices: RangeIndices) -> Result<(), SliceQueryError> {
    let (tuple, side) = if indices.start > indices.end {
        (query.start(), TupleSide::Start)
    } else {
        (query.end(), TupleSide::End)
    };
    let kind = present(tuple, indices.max(), side)?.kind();

    if kind.supports_ordering() {
        Ok(())
    } else {
        Err(ComponentTypeError::Unordered { kind }.into())
    }
}

fn validate_direction(query: &SliceQuery, index: usize) -> Result<(), SliceQueryError> {
    let start = present(query.start(), index, TupleSide::Start)?;
    let end = present(query.end(), index, TupleSide::End)?;
    let direction = query.order();

    match (direction, ordered_cmp(start, end)?) {
        (Direction::Asc, Ordering::Greater) | (Direction::Desc, Ordering::Less) => {
            Err(SliceQueryError::Ordering { index, direction })
        }
        _ => Ok(()),
    }
}

fn present(tuple: &KeyTuple, index: usize, side: TupleSide) -> Result<&Value, SliceQueryError> {
    tuple
        .component(index)
        .ok_or(SliceQueryError::PartitionKey(PartitionKeyError::Missing { side, index }))
}
