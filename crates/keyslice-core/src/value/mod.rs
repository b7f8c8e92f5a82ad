mod compare;


use crate::types::{Float32, Float64};
use keyslice_primitives::ComponentKind;
use ulid::Ulid;

// re-exports
pub use compare::{ComponentTypeError, components_equal, ordered_cmp};

///
/// Value
///
/// One present key component. Absence is expressed by the surrounding
/// tuple (`Option<Value>`), never by a variant.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Enum(ValueEnum),
    Float32(Float32),
    Float64(Float64),
    Int(i64),
    /// Ordered list of values.
    /// Carried for equality only; lists never bound a range.
    List(Vec<Self>),
    Text(String),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    /// Return the component kind backing this value.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Blob(_) => ComponentKind::Blob,
            Self::Bool(_) => ComponentKind::Bool,
            Self::Enum(_) => ComponentKind::Enum,
            Self::Float32(_) => ComponentKind::Float32,
            Self::Float64(_) => ComponentKind::Float64,
            Self::Int(_) => ComponentKind::Int,
            Self::List(_) => ComponentKind::List,
            Self::Text(_) => ComponentKind::Text,
            Self::Uint(_) => ComponentKind::Uint,
            Self::Ulid(_) => ComponentKind::Ulid,
        }
    }

    #[must_use]
    pub const fn supports_ordering(&self) -> bool {
        self.kind().supports_ordering()
    }
}

///
/// ValueEnum
/// Fixed-label value; `path` names the enumerated type when known.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ValueEnum {
    pub variant: String,
    pub path: Option<String>,
}

impl ValueEnum {
    /// Build a strict enum value matching the provided variant and path.
    #[must_use]
    pub fn new(variant: &str, path: Option<&str>) -> Self {
        Self {
            variant: variant.to_string(),
            path: path.map(ToString::to_string),
        }
    }

    /// Build an enum value that ignores the path for loose matching.
    #[must_use]
    pub fn loose(variant: &str) -> Self {
        Self::new(variant, None)
    }
}

///
/// KeyComponent
///
/// Capability trait for native types that can be stored as one key
/// component. `KIND` is fixed per type, so orderability is known statically.
///

pub trait KeyComponent {
    const KIND: ComponentKind;

    fn to_value(&self) -> Value;

    /// Whether range comparisons are defined for this type.
    #[must_use]
    fn supports_ordering() -> bool {
        Self::KIND.supports_ordering()
    }
}

macro_rules! impl_key_component {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl KeyComponent for $ty {
                const KIND: ComponentKind = ComponentKind::$variant;

                fn to_value(&self) -> Value {
                    Value::$variant(From::from(*self))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    value.to_value()
                }
            }
        )*
    };
}

impl_key_component! {
    bool => Bool,
    i64 => Int,
    i32 => Int,
    i16 => Int,
    u64 => Uint,
    u32 => Uint,
    u16 => Uint,
    Float32 => Float32,
    Float64 => Float64,
    Ulid => Ulid,
}

impl KeyComponent for &str {
    const KIND: ComponentKind = ComponentKind::Text;

    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl KeyComponent for String {
    const KIND: ComponentKind = ComponentKind::Text;

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl KeyComponent for Vec<u8> {
    const KIND: ComponentKind = ComponentKind::Blob;

    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl KeyComponent for ValueEnum {
    const KIND: ComponentKind = ComponentKind::Enum;

    fn to_value(&self) -> Value {
        Value::Enum(self.clone())
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
