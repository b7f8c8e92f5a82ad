use crate::{
    error::InternalError,
    obs::{SliceTraceSink, TraceStage, start_slice_trace},
    slice::{
        MarkerRange, RangePredicate, ResolvedRange, SliceFingerprint, SliceQuery, resolve_slice,
    },
};

///
/// SliceSession
///
/// Resolution handle with policy (debug, tracing). Resolution itself is
/// pure; the session only adds logging, trace events and error
/// classification around it.
///

#[derive(Clone, Copy, Default)]
pub struct SliceSession {
    debug: bool,
    trace: Option<&'static dyn SliceTraceSink>,
}

impl SliceSession {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            debug: false,
            trace: None,
        }
    }

    /// Log every resolved range at debug level.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    #[must_use]
    pub const fn trace_sink(mut self, sink: &'static dyn SliceTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    // ---------------------------------------------------------------------
    // Resolution entry points
    // ---------------------------------------------------------------------

    pub fn resolve(&self, query: &SliceQuery) -> Result<ResolvedRange, InternalError> {
        self.run(TraceStage::Resolve, query, |range| Ok(range.clone()))
    }

    /// Resolve, then project onto named key columns (one per key position).
    pub fn range_predicate(
        &self,
        query: &SliceQuery,
        columns: &[&str],
    ) -> Result<RangePredicate, InternalError> {
        self.run(TraceStage::RangePredicate, query, |range| {
            RangePredicate::from_resolved(range, query, columns).map_err(InternalError::from)
        })
    }

    /// Resolve, then project onto legacy composite markers.
    pub fn marker_range(&self, query: &SliceQuery) -> Result<MarkerRange, InternalError> {
        self.run(TraceStage::MarkerRange, query, |range| {
            Ok(MarkerRange::from_resolved(range, query))
        })
    }

    // Shared wrapper: resolve under an optional trace scope, then project.
    fn run<T>(
        &self,
        stage: TraceStage,
        query: &SliceQuery,
        project: impl FnOnce(&ResolvedRange) -> Result<T, InternalError>,
    ) -> Result<T, InternalError> {
        let scope = start_slice_trace(self.trace, stage, query);

        let result = resolve_slice(query)
            .map_err(InternalError::from)
            .and_then(|range| project(&range).map(|out| (range, out)));

        match result {
            Ok((range, out)) => {
                if self.debug {
                    tracing::debug!(
                        stage = ?stage,
                        fingerprint = %SliceFingerprint::of(query),
                        fixed = range.fixed().len(),
                        bounded_start = range.last_start().is_some(),
                        bounded_end = range.last_end().is_some(),
                        range = ?range,
                        "slice range resolved"
                    );
                }
                if let Some(scope) = scope {
                    scope.finish(&range);
                }

                Ok(out)
            }
            Err(err) => {
                tracing::debug!(
                    stage = ?stage,
                    class = %err.class,
                    origin = %err.origin,
                    error = %err,
                    "slice query rejected"
                );
                if let Some(scope) = scope {
                    scope.error(&err);
                }

                Err(err)
            }
        }
    }
}
