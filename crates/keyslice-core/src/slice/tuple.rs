use crate::{
    slice::SliceQueryError,
    value::{KeyComponent, Value},
};
use derive_more::{Deref, IntoIterator};

///
/// KeyTuple
///
/// Ordered, possibly partial primary key. Leading entries are the partition
/// key; the rest are clustering components in declared order. A `None`
/// entry is an absent component and must only be followed by absent ones.
///

#[derive(Clone, Debug, Deref, Eq, Hash, IntoIterator, PartialEq)]
pub struct KeyTuple {
    owner: String,

    #[deref]
    #[into_iterator(owned, ref)]
    components: Vec<Option<Value>>,
}

impl KeyTuple {
    /// Build a tuple for the property named `owner`.
    pub fn new(owner: impl Into<String>, components: Vec<Option<Value>>) -> Self {
        Self {
            owner: owner.into(),
            components,
        }
    }

    /// Append one present component.
    #[must_use]
    pub fn with<C: KeyComponent>(mut self, component: C) -> Self {
        self.components.push(Some(component.to_value()));
        self
    }

    /// Append one absent component.
    #[must_use]
    pub fn absent(mut self) -> Self {
        self.components.push(None);
        self
    }

    /// Name of the property that owns this key, used in diagnostics.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.components.len()
    }

    /// Component at `index`, or `None` when absent or out of range.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<&Value> {
        self.components.get(index).and_then(Option::as_ref)
    }

    /// Index of the last present component, or `None` when every component
    /// is absent. Fails when a present component follows an absent one.
    pub fn last_non_null_index(&self) -> Result<Option<usize>, SliceQueryError> {
        let mut last = None;
        let mut seen_absent = false;

        for (index, component) in self.components.iter().enumerate() {
            match component {
                Some(_) if seen_absent => {
                    return Err(SliceQueryError::HoleInKeyTuple {
                        owner: self.owner.clone(),
                        index,
                    });
                }
                Some(_) => last = Some(index),
                None => seen_absent = true,
            }
        }

        Ok(last)
    }
}

///
/// TESTS
///
