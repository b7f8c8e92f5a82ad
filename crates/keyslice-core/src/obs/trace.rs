use crate::{
    error::{ErrorClass, ErrorOrigin, InternalError},
    slice::{ResolvedRange, SliceFingerprint, SliceQuery},
};

///
/// SliceTraceSink
///

pub trait SliceTraceSink: Send + Sync {
    fn on_event(&self, event: SliceTraceEvent);
}

///
/// TraceStage
///
/// Which session entry point produced an event.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceStage {
    Resolve,
    RangePredicate,
    MarkerRange,
}

///
/// TraceBoundary
///
/// Which trailing bounds a resolved range carries.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceBoundary {
    None,
    Start,
    End,
    Both,
}

impl TraceBoundary {
    #[must_use]
    pub const fn of(range: &ResolvedRange) -> Self {
        match (range.last_start().is_some(), range.last_end().is_some()) {
            (false, false) => Self::None,
            (true, false) => Self::Start,
            (false, true) => Self::End,
            (true, true) => Self::Both,
        }
    }
}

///
/// SliceTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SliceTraceEvent {
    Start {
        fingerprint: SliceFingerprint,
        stage: TraceStage,
    },
    Finish {
        fingerprint: SliceFingerprint,
        stage: TraceStage,
        fixed: u32,
        boundary: TraceBoundary,
    },
    Error {
        fingerprint: SliceFingerprint,
        stage: TraceStage,
        class: ErrorClass,
        origin: ErrorOrigin,
    },
}

///
/// TraceScope
///

pub(crate) struct TraceScope {
    sink: &'static dyn SliceTraceSink,
    fingerprint: SliceFingerprint,
    stage: TraceStage,
}

impl TraceScope {
    fn new(
        sink: &'static dyn SliceTraceSink,
        fingerprint: SliceFingerprint,
        stage: TraceStage,
    ) -> Self {
        sink.on_event(SliceTraceEvent::Start { fingerprint, stage });

        Self {
            sink,
            fingerprint,
            stage,
        }
    }

    pub(crate) fn finish(self, range: &ResolvedRange) {
        self.sink.on_event(SliceTraceEvent::Finish {
            fingerprint: self.fingerprint,
            stage: self.stage,
            fixed: u32::try_from(range.fixed().len()).unwrap_or(u32::MAX),
            boundary: TraceBoundary::of(range),
        });
    }

    pub(crate) fn error(self, err: &InternalError) {
        self.sink.on_event(SliceTraceEvent::Error {
            fingerprint: self.fingerprint,
            stage: self.stage,
            class: err.class,
            origin: err.origin,
        });
    }
}

pub(crate) fn start_slice_trace(
    sink: Option<&'static dyn SliceTraceSink>,
    stage: TraceStage,
    query: &SliceQuery,
) -> Option<TraceScope> {
    let sink = sink?;
    let fingerprint = SliceFingerprint::of(query);

    Some(TraceScope::new(sink, fingerprint, stage))
}
