use crate::{
    slice::{RangeIndices, SliceQuery},
    value::{Value, components_equal},
};
use std::cmp::Ordering;

/// Trailing `(start, end)` components that carry the range comparison.
///
/// | last indices        | start      | end      |
/// |---------------------|------------|----------|
/// | equal, values differ| `start[i]` | `end[i]` |
/// | equal, values match | absent     | absent   |
/// | start < end         | absent     | `end[e]` |
/// | start > end         | `start[s]` | absent   |
///
/// Both absent means the slice degenerates to an equality lookup on the
/// fixed components alone.
#[must_use]
pub fn boundary_components(
    query: &SliceQuery,
    indices: RangeIndices,
) -> (Option<Value>, Option<Value>) {
    let start = query.start().component(indices.start);
    let end = query.end().component(indices.end);

    match indices.start.cmp(&indices.end) {
        Ordering::Less => (None, end.cloned()),
        Ordering::Greater => (start.cloned(), None),
        Ordering::Equal => match (start, end) {
            (Some(s), Some(e)) if components_equal(s, e) => (None, None),
            _ => (start.cloned(), end.cloned()),
        },
    }
}
