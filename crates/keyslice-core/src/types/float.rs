use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// FloatError
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum FloatError {
    #[error("non-finite float cannot be used as a key component")]
    NonFinite,
}

// One wrapper per float width.
macro_rules! finite_float {
    ($name:ident, $prim:ty, $bytes:literal) => {
        ///
        /// Float key component. Holds finite values only, so every stored
        /// value has a place in the total order; zero has one bit pattern.
        ///

        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, Display, Serialize)]
        pub struct $name($prim);

        impl $name {
            /// `None` for NaN and infinities. Negative zero is stored as zero.
            #[must_use]
            pub fn try_new(v: $prim) -> Option<Self> {
                if !v.is_finite() {
                    return None;
                }

                // keys compare and hash by bits; both zeros must share them
                Some(Self(if v == 0.0 { 0.0 } else { v }))
            }

            #[must_use]
            pub const fn get(self) -> $prim {
                self.0
            }

            #[must_use]
            pub const fn to_be_bytes(&self) -> [u8; $bytes] {
                self.0.to_bits().to_be_bytes()
            }
        }

        impl Eq for $name {}

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl TryFrom<$prim> for $name {
            type Error = FloatError;

            fn try_from(v: $prim) -> Result<Self, Self::Error> {
                Self::try_new(v).ok_or(FloatError::NonFinite)
            }
        }

        impl From<$name> for $prim {
            fn from(x: $name) -> Self {
                x.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let v = <$prim>::deserialize(deserializer)?;

                Self::try_new(v).ok_or_else(|| serde::de::Error::custom(FloatError::NonFinite))
            }
        }
    };
}

finite_float!(Float32, f32, 4);
finite_float!(Float64, f64, 8);

///
/// TESTS
///
