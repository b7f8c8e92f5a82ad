use crate::value::{Value, ValueEnum};
use keyslice_primitives::{ComponentKind, OrderingRule};
use std::cmp::Ordering;
use thiserror::Error as ThisError;

///
/// ComponentTypeError
///
/// Two key components could not be placed in a total order.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ComponentTypeError {
    #[error("component type must support ordering: '{kind}' has no total order")]
    Unordered { kind: ComponentKind },

    #[error("component type must support ordering: cannot order '{left}' against '{right}'")]
    KindMismatch {
        left: ComponentKind,
        right: ComponentKind,
    },

    #[error(
        "component type must support ordering: enum '{left}' cannot be ordered against enum '{right}'"
    )]
    EnumTypeMismatch { left: String, right: String },
}

/// Strict comparator for two present key components.
///
/// Ordering rules come from the component kind registry:
/// - `Native` kinds compare by their own total order
/// - `Label` kinds (enums) compare lexicographically by variant label
/// - `Unordered` kinds and mixed kinds are rejected
pub fn ordered_cmp(left: &Value, right: &Value) -> Result<Ordering, ComponentTypeError> {
    let kind = left.kind();
    if kind != right.kind() {
        return Err(ComponentTypeError::KindMismatch {
            left: kind,
            right: right.kind(),
        });
    }

    match kind.ordering_rule() {
        OrderingRule::Native => native_cmp(left, right).ok_or(ComponentTypeError::Unordered { kind }),
        OrderingRule::Label => label_cmp(left, right),
        OrderingRule::Unordered => Err(ComponentTypeError::Unordered { kind }),
    }
}

/// Key-level equality: structural equality, or an `Equal` outcome from
/// [`ordered_cmp`] (a loose enum matches a typed enum of the same label).
#[must_use]
pub fn components_equal(left: &Value, right: &Value) -> bool {
    left == right || matches!(ordered_cmp(left, right), Ok(Ordering::Equal))
}

fn native_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Float32(a), Value::Float32(b)) => Some(a.cmp(b)),
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        (Value::Ulid(a), Value::Ulid(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn label_cmp(left: &Value, right: &Value) -> Result<Ordering, ComponentTypeError> {
    let (Value::Enum(left), Value::Enum(right)) = (left, right) else {
        return Err(ComponentTypeError::Unordered {
            kind: left.kind(),
        });
    };

    same_enum_type(left, right)?;

    Ok(left.variant.cmp(&right.variant))
}

// Loose enums (no path) are accepted against any enum of the same kind.
fn same_enum_type(left: &ValueEnum, right: &ValueEnum) -> Result<(), ComponentTypeError> {
    match (&left.path, &right.path) {
        (Some(l), Some(r)) if l != r => Err(ComponentTypeError::EnumTypeMismatch {
            left: l.clone(),
            right: r.clone(),
        }),
        _ => Ok(()),
    }
}
