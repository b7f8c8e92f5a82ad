//! Core runtime for keyslice: key-component values, the ordered comparator,
//! slice-query range resolution, and the adapters that project a resolved
//! range into range predicates or legacy composite markers.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod error;
pub mod obs;
pub mod session;
pub mod slice;
pub mod types;
pub mod value;

///
/// CONSTANTS
///

/// Row limit applied when a slice query does not set one explicitly.
pub const DEFAULT_SLICE_LIMIT: u32 = 100;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        key_tuple,
        session::SliceSession,
        slice::{BoundingMode, Direction, KeyTuple, ResolvedRange, SliceQuery},
        value::{KeyComponent, Value},
    };
}
