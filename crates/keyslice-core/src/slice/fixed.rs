use crate::{
    slice::{RangeIndices, SliceQuery},
    value::{Value, components_equal},
};

/// Equality prefix of a validated slice: one value per leading component
/// that is fixed on both sides, in declared order.
///
/// With equal last indices the prefix stops at the first component where
/// start and end diverge. Otherwise every component up to the shorter
/// tuple's last index is included; validation already proved them equal.
#[must_use]
pub fn fixed_components(query: &SliceQuery, indices: RangeIndices) -> Vec<Value> {
    let pairs = query
        .start()
        .iter()
        .zip(query.end().iter())
        .take(indices.min() + 1);

    if indices.start == indices.end {
        pairs
            .map_while(|pair| match pair {
                (Some(start), Some(end)) if components_equal(start, end) => Some(start.clone()),
                _ => None,
            })
            .collect()
    } else {
        pairs
            .filter_map(|(start, _)| start.clone())
            .collect()
    }
}
