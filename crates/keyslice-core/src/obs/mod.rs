//! Observability: caller-injected trace sinks for slice resolution.
//!
//! Tracing is optional, owned by the caller, and must not affect
//! resolution semantics. No global state lives here.

mod trace;

// re-exports
pub use trace::{SliceTraceEvent, SliceTraceSink, TraceBoundary, TraceStage};
pub(crate) use trace::start_slice_trace;
