use crate::{
    DEFAULT_SLICE_LIMIT,
    slice::{BoundingMode, Direction, KeyTuple, PartitionKeyError, RangeShapeError, SliceQueryError},
};

///
/// SliceQuery
///
/// Immutable description of one slice over a compound primary key.
/// Built once per query through [`SliceQueryBuilder`].
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SliceQuery {
    start: KeyTuple,
    end: KeyTuple,
    order: Direction,
    bounding: BoundingMode,
    partition_len: usize,
    limit: u32,
}

impl SliceQuery {
    #[must_use]
    pub fn builder(start: KeyTuple, end: KeyTuple) -> SliceQueryBuilder {
        SliceQueryBuilder::new(start, end)
    }

    #[must_use]
    pub const fn start(&self) -> &KeyTuple {
        &self.start
    }

    #[must_use]
    pub const fn end(&self) -> &KeyTuple {
        &self.end
    }

    #[must_use]
    pub const fn order(&self) -> Direction {
        self.order
    }

    #[must_use]
    pub const fn bounding(&self) -> BoundingMode {
        self.bounding
    }

    /// Number of leading components that form the partition key.
    #[must_use]
    pub const fn partition_len(&self) -> usize {
        self.partition_len
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

///
/// SliceQueryBuilder
///

#[derive(Clone, Debug)]
pub struct SliceQueryBuilder {
    start: KeyTuple,
    end: KeyTuple,
    order: Direction,
    bounding: BoundingMode,
    partition_len: usize,
    limit: u32,
}

impl SliceQueryBuilder {
    #[must_use]
    pub const fn new(start: KeyTuple, end: KeyTuple) -> Self {
        Self {
            start,
            end,
            order: Direction::Asc,
            bounding: BoundingMode::InclusiveBounds,
            partition_len: 1,
            limit: DEFAULT_SLICE_LIMIT,
        }
    }

    #[must_use]
    pub const fn order(mut self, order: Direction) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub const fn bounding(mut self, bounding: BoundingMode) -> Self {
        self.bounding = bounding;
        self
    }

    #[must_use]
    pub const fn partition_len(mut self, partition_len: usize) -> Self {
        self.partition_len = partition_len;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Check tuple arity and partition length, then freeze the query.
    pub fn build(self) -> Result<SliceQuery, SliceQueryError> {
        let (start_arity, end_arity) = (self.start.arity(), self.end.arity());
        if start_arity != end_arity {
            return Err(RangeShapeError::ArityMismatch {
                start: start_arity,
                end: end_arity,
            }
            .into());
        }

        if self.partition_len == 0 || self.partition_len > start_arity {
            return Err(PartitionKeyError::InvalidLength {
                partition_len: self.partition_len,
                arity: start_arity,
            }
            .into());
        }

        Ok(SliceQuery {
            start: self.start,
            end: self.end,
            order: self.order,
            bounding: self.bounding,
            partition_len: self.partition_len,
            limit: self.limit,
        })
    }
}

///
/// TESTS
///
