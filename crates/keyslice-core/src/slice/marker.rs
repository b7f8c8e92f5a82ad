//! Legacy composite-marker projection of a resolved range.
//!
//! The marker encoding packs the clustering components and an equality
//! marker into one synthetic column name; a range scan is expressed as a
//! pair of such markers handed to the column range-scan primitive.

use crate::{
    slice::{BoundingMode, Direction, ResolvedRange, SliceQuery},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// ComponentEquality
///
/// Equality marker appended to the last component of a composite.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ComponentEquality {
    Equal,
    GreaterOrEqual,
    LessOrEqual,
}

///
/// EqualityPair
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EqualityPair {
    pub start: ComponentEquality,
    pub end: ComponentEquality,
}

impl EqualityPair {
    #[must_use]
    pub const fn new(start: ComponentEquality, end: ComponentEquality) -> Self {
        Self { start, end }
    }

    /// Markers for one bounding/ordering combination.
    ///
    /// This table is the only definition of endpoint inclusivity for the
    /// marker encoding; changing a cell flips which endpoint is scanned.
    #[must_use]
    pub const fn resolve(bounding: BoundingMode, order: Direction) -> Self {
        use ComponentEquality::{Equal, GreaterOrEqual, LessOrEqual};

        match (bounding, order) {
            (BoundingMode::InclusiveBounds, Direction::Asc) => Self::new(Equal, GreaterOrEqual),
            (BoundingMode::InclusiveBounds, Direction::Desc) => Self::new(GreaterOrEqual, Equal),
            (BoundingMode::ExclusiveBounds, Direction::Asc) => {
                Self::new(GreaterOrEqual, LessOrEqual)
            }
            (BoundingMode::ExclusiveBounds, Direction::Desc) => {
                Self::new(LessOrEqual, GreaterOrEqual)
            }
            (BoundingMode::InclusiveStartOnly, Direction::Asc) => Self::new(Equal, LessOrEqual),
            (BoundingMode::InclusiveStartOnly, Direction::Desc) => {
                Self::new(GreaterOrEqual, GreaterOrEqual)
            }
            (BoundingMode::InclusiveEndOnly, Direction::Asc) => {
                Self::new(GreaterOrEqual, GreaterOrEqual)
            }
            (BoundingMode::InclusiveEndOnly, Direction::Desc) => Self::new(LessOrEqual, Equal),
        }
    }

    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.end, self.start)
    }
}

///
/// CompositeMarker
///
/// One endpoint of a marker range: the component values in key order plus
/// the equality marker for the last of them.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CompositeMarker {
    pub components: Vec<Value>,
    pub equality: ComponentEquality,
}

///
/// MarkerRange
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MarkerRange {
    pub start: CompositeMarker,
    pub end: CompositeMarker,
    pub reversed: bool,
    pub limit: u32,
}

impl MarkerRange {
    /// Project a resolved range onto start/end composite markers.
    #[must_use]
    pub fn from_resolved(range: &ResolvedRange, query: &SliceQuery) -> Self {
        let pair = EqualityPair::resolve(query.bounding(), query.order());

        Self {
            start: marker(range.fixed(), range.last_start(), pair.start),
            end: marker(range.fixed(), range.last_end(), pair.end),
            reversed: query.order().is_reversed(),
            limit: query.limit(),
        }
    }
}

fn marker(fixed: &[Value], last: Option<&Value>, equality: ComponentEquality) -> CompositeMarker {
    let mut components = Vec::with_capacity(fixed.len() + 1);
    components.extend_from_slice(fixed);
    components.extend(last.cloned());

    CompositeMarker {
        components,
        equality,
    }
}
