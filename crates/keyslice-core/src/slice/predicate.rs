use crate::{
    slice::{Direction, ResolvedRange, SliceQuery},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// AdapterError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AdapterError {
    #[error("no column name for key component {position} ({available} column names supplied)")]
    MissingColumn { position: usize, available: usize },
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CompareOp {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }

    // Lower bound of the scanned range.
    const fn lower(inclusive: bool) -> Self {
        if inclusive { Self::Gte } else { Self::Gt }
    }

    // Upper bound of the scanned range.
    const fn upper(inclusive: bool) -> Self {
        if inclusive { Self::Lte } else { Self::Lt }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// ComponentPredicate
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComponentPredicate {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

///
/// RangePredicate
///
/// Parameterized range form of a resolved slice: equality conditions in key
/// order, then at most two comparisons on the bounded component, plus the
/// sort direction and row limit.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RangePredicate {
    pub predicates: Vec<ComponentPredicate>,
    pub order: Direction,
    pub limit: u32,
}

impl RangePredicate {
    /// Project a resolved range onto named key columns.
    ///
    /// For `Asc` the start value is the lower bound; for `Desc` the start
    /// value is the upper bound. Inclusivity follows the bounding mode.
    pub fn from_resolved(
        range: &ResolvedRange,
        query: &SliceQuery,
        columns: &[&str],
    ) -> Result<Self, AdapterError> {
        let mut predicates = Vec::with_capacity(range.fixed().len() + 2);

        for (position, value) in range.fixed().iter().enumerate() {
            predicates.push(ComponentPredicate {
                column: column_at(columns, position)?.to_string(),
                op: CompareOp::Eq,
                value: value.clone(),
            });
        }

        if !range.is_equality_lookup() {
            let column = column_at(columns, range.boundary_position())?;
            let bounding = query.bounding();
            let (start_op, end_op) = match query.order() {
                Direction::Asc => (
                    CompareOp::lower(bounding.start_inclusive()),
                    CompareOp::upper(bounding.end_inclusive()),
                ),
                Direction::Desc => (
                    CompareOp::upper(bounding.start_inclusive()),
                    CompareOp::lower(bounding.end_inclusive()),
                ),
            };

            let bounds = [(range.last_start(), start_op), (range.last_end(), end_op)];
            for (value, op) in bounds {
                if let Some(value) = value {
                    predicates.push(ComponentPredicate {
                        column: column.to_string(),
                        op,
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(Self {
            predicates,
            order: query.order(),
            limit: query.limit(),
        })
    }
}

fn column_at<'a>(columns: &[&'a str], position: usize) -> Result<&'a str, AdapterError> {
    columns
        .get(position)
        .copied()
        .ok_or(AdapterError::MissingColumn {
            position,
            available: columns.len(),
        })
}
