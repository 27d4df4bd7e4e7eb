use serde::{Deserialize, Serialize};

/// Why an operation declined to mutate anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// Fewer shapes than the operation needs.
    TooFewShapes,
    /// A scale would collapse or invert the box.
    DegenerateExtent,
    /// Every delta was zero or no point was movable.
    NothingToMove,
}

/// Result of a transform or layout operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn skip_reason(self) -> Option<SkipReason> {
        match self {
            Outcome::Applied => None,
            Outcome::Skipped(reason) => Some(reason),
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::TooFewShapes => write!(f, "too few shapes"),
            SkipReason::DegenerateExtent => write!(f, "degenerate extent"),
            SkipReason::NothingToMove => write!(f, "nothing to move"),
        }
    }
}
