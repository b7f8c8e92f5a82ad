use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Direction
///
/// Requested ordering of the clustering components in a slice. For
/// `Desc` the start tuple is the high end of the range.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        };
        write!(f, "{label}")
    }
}

///
/// BoundingMode
///
/// Which endpoints of a slice are inclusive.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BoundingMode {
    #[default]
    InclusiveBounds,
    ExclusiveBounds,
    InclusiveStartOnly,
    InclusiveEndOnly,
}

impl BoundingMode {
    pub const ALL: [Self; 4] = [
        Self::InclusiveBounds,
        Self::ExclusiveBounds,
        Self::InclusiveStartOnly,
        Self::InclusiveEndOnly,
    ];

    #[must_use]
    pub const fn start_inclusive(self) -> bool {
        matches!(self, Self::InclusiveBounds | Self::InclusiveStartOnly)
    }

    #[must_use]
    pub const fn end_inclusive(self) -> bool {
        matches!(self, Self::InclusiveBounds | Self::InclusiveEndOnly)
    }

    /// Swap start-only and end-only inclusivity.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::InclusiveStartOnly => Self::InclusiveEndOnly,
            Self::InclusiveEndOnly => Self::InclusiveStartOnly,
            other => other,
        }
    }
}
