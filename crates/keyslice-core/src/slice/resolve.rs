use crate::{
    slice::{SliceQuery, SliceQueryError, boundary_components, fixed_components, validate_range},
    value::Value,
};

///
/// ResolvedRange
///
/// Equality prefix plus at most one bounded trailing component.
/// The bounded component, when present, sits at position `fixed.len()`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResolvedRange {
    fixed: Vec<Value>,
    last_start: Option<Value>,
    last_end: Option<Value>,
}

impl ResolvedRange {
    #[must_use]
    pub fn fixed(&self) -> &[Value] {
        &self.fixed
    }

    #[must_use]
    pub const fn last_start(&self) -> Option<&Value> {
        self.last_start.as_ref()
    }

    #[must_use]
    pub const fn last_end(&self) -> Option<&Value> {
        self.last_end.as_ref()
    }

    /// Key position of the bounded trailing component.
    #[must_use]
    pub const fn boundary_position(&self) -> usize {
        self.fixed.len()
    }

    /// No trailing bound: the slice is a lookup on the fixed prefix alone.
    #[must_use]
    pub const fn is_equality_lookup(&self) -> bool {
        self.last_start.is_none() && self.last_end.is_none()
    }
}

/// Run the full pipeline: validate, then resolve fixed and boundary
/// components. Pure; identical input always yields an identical range.
pub fn resolve_slice(query: &SliceQuery) -> Result<ResolvedRange, SliceQueryError> {
    let indices = validate_range(query)?;
    let fixed = fixed_components(query, indices);
    let (last_start, last_end) = boundary_components(query, indices);

    Ok(ResolvedRange {
        fixed,
        last_start,
        last_end,
    })
}
