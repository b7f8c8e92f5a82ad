//! Module: slice
//! Responsibility: resolve a partial primary-key range into an equality
//! prefix plus at most one bounded trailing component.
//! Does not own: statement generation, storage I/O, or entity metadata.
//! Boundary: the session facade and external query builders call
//! `resolve_slice` and project the result through one of the adapters.

mod boundary;
mod error;
mod fingerprint;
mod fixed;
mod marker;
mod mode;
mod predicate;
mod query;
mod resolve;
mod tuple;
mod validate;

#[cfg(test)]
mod tests;

// re-exports
pub use boundary::boundary_components;
pub use error::{PartitionKeyError, RangeShapeError, SliceQueryError, TupleSide};
pub use fingerprint::SliceFingerprint;
pub use fixed::fixed_components;
pub use marker::{ComponentEquality, CompositeMarker, EqualityPair, MarkerRange};
pub use mode::{BoundingMode, Direction};
pub use predicate::{AdapterError, CompareOp, ComponentPredicate, RangePredicate};
pub use query::{SliceQuery, SliceQueryBuilder};
pub use resolve::{ResolvedRange, resolve_slice};
pub use tuple::KeyTuple;
pub use validate::{RangeIndices, validate_range};
