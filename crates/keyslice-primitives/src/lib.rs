#[macro_use]
mod macros;

///
/// ComponentKind
///
/// Canonical key-component kind used for shared capability metadata.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComponentKind {
    Blob,
    Bool,
    Enum,
    Float32,
    Float64,
    Int,
    List,
    Text,
    Uint,
    Ulid,
}

impl ComponentKind {
    /// Return the full metadata descriptor for one component kind.
    #[must_use]
    pub const fn metadata(self) -> ComponentMetadata {
        component_kind_registry!(metadata_from_registry, self)
    }

    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }

    /// Return how two values of this kind are ordered.
    #[must_use]
    pub const fn ordering_rule(self) -> OrderingRule {
        self.metadata().ordering
    }

    /// Return whether this kind supports ordering comparisons.
    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        !matches!(self.ordering_rule(), OrderingRule::Unordered)
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ComponentMetadata
///
/// Capability metadata shared across the value and slice layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComponentMetadata {
    pub label: &'static str,
    pub ordering: OrderingRule,
}

///
/// OrderingRule
///
/// How two values of the same component kind are ordered.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OrderingRule {
    /// The kind carries its own total order.
    Native,
    /// Fixed-label kinds: compared lexicographically by label.
    Label,
    /// No total order; range comparisons are rejected.
    Unordered,
}

/// Ordered list of all component kinds in registry order.
pub const ALL_COMPONENT_KINDS: [ComponentKind; 10] =
    component_kind_registry!(all_kinds_from_registry);

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_every_kind_once() {
        for (i, left) in ALL_COMPONENT_KINDS.iter().enumerate() {
            for right in &ALL_COMPONENT_KINDS[i + 1..] {
                assert_ne!(left, right, "duplicate registry entry for {left}");
            }
        }
    }

    #[test]
    fn enum_kind_orders_by_label() {
        assert_eq!(ComponentKind::Enum.ordering_rule(), OrderingRule::Label);
        assert!(ComponentKind::Enum.supports_ordering());
    }

    #[test]
    fn list_is_the_only_unordered_kind() {
        let unordered: Vec<_> = ALL_COMPONENT_KINDS
            .into_iter()
            .filter(|kind| !kind.supports_ordering())
            .collect();

        assert_eq!(unordered, vec![ComponentKind::List]);
    }

    #[test]
    fn labels_match_variant_names() {
        assert_eq!(ComponentKind::Float64.to_string(), "Float64");
        assert_eq!(ComponentKind::Ulid.label(), "Ulid");
    }
}
