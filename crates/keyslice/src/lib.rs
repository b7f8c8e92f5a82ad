//! ## Crate layout
//! - `core`: key-component values, the ordered comparator, slice-query
//!   resolution, adapters, errors, and trace sinks.
//! - `primitives`: the component kind registry shared by every layer.
//!
//! The `prelude` module carries the vocabulary needed to build and resolve a
//! slice query; errors and adapters stay one path down in `core`.

pub use keyslice_core as core;
pub use keyslice_primitives as primitives;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use keyslice_core::key_tuple;

// re-exports
pub use keyslice_core::{
    DEFAULT_SLICE_LIMIT,
    error::InternalError as Error,
    session::SliceSession,
};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        key_tuple,
        session::SliceSession,
        slice::{BoundingMode, Direction, KeyTuple, ResolvedRange, SliceQuery},
        types::{Float32, Float64},
        value::{KeyComponent as _, Value, ValueEnum},
    };
    pub use crate::primitives::ComponentKind;
}

///
/// TESTS
///
