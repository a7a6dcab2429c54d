//! Errors surfaced to callers of the programmatic API.

use crate::color::ParseColorError;

/// Misuse of the slider or gradient API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A gradient needs at least two anchor colors.
    #[error("gradient needs 2 or more anchor colors, got {count}")]
    TooFewAnchors { count: usize },
    /// Every gradient block must contain at least one step.
    #[error("{steps} steps cannot be split across {anchors} anchor colors")]
    TooFewSteps { steps: usize, anchors: usize },
    #[error(transparent)]
    Parse(#[from] ParseColorError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
