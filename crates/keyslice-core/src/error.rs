use crate::{
    slice::{AdapterError, SliceQueryError},
    value::ComponentTypeError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured error with a stable classification, returned by the session
/// facade. Query layers use `class` to tell rejected user input apart from
/// storage or network faults raised elsewhere.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: ErrorDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Return the slice-resolution failure carried by this error, if any.
    #[must_use]
    pub const fn slice_error(&self) -> Option<&SliceQueryError> {
        match &self.detail {
            Some(ErrorDetail::Slice(err)) => Some(err),
            _ => None,
        }
    }

    /// Input failures are never retryable; nothing was sent to storage.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self.class, ErrorClass::InvalidInput)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<SliceQueryError> for InternalError {
    fn from(err: SliceQueryError) -> Self {
        let (class, origin) = match &err {
            SliceQueryError::ComponentType(_) => (ErrorClass::Unsupported, ErrorOrigin::Value),
            SliceQueryError::HoleInKeyTuple { .. }
            | SliceQueryError::RangeShape(_)
            | SliceQueryError::Ordering { .. }
            | SliceQueryError::PartitionKey(_) => (ErrorClass::InvalidInput, ErrorOrigin::Query),
        };

        Self::new(class, origin, err.to_string()).with_detail(ErrorDetail::Slice(err))
    }
}

impl From<ComponentTypeError> for InternalError {
    fn from(err: ComponentTypeError) -> Self {
        Self::from(SliceQueryError::from(err))
    }
}

impl From<AdapterError> for InternalError {
    fn from(err: AdapterError) -> Self {
        Self::new(ErrorClass::Unsupported, ErrorOrigin::Adapter, err.to_string())
            .with_detail(ErrorDetail::Adapter(err))
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Slice(SliceQueryError),
    #[error("{0}")]
    Adapter(AdapterError),
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidInput,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidInput => "invalid_input",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Value,
    Query,
    Adapter,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Value => "value",
            Self::Query => "query",
            Self::Adapter => "adapter",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
