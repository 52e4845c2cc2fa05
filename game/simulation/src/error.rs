use common::*;

use crate::Role;

/// Rejected world construction
#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("Arena dimensions must be positive and finite, got {0}x{1}")]
    InvalidArena(F, F),

    #[error("Timestep must be positive and finite, got {0}")]
    InvalidTimestep(F),

    #[error("Agent radius must be positive and finite, got {0}")]
    InvalidRadius(F),

    #[error("Agent {0} must be finite")]
    NonFinite(&'static str),

    #[error("Flee epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(F),

    #[error("Only one {0} is allowed per world")]
    DuplicateRole(Role),

    #[error("World needs an evader or a runner")]
    MissingQuarry,

    #[error("An evader and a runner cannot share a world")]
    ConflictingQuarry,

    #[error("An evader needs a chaser to flee from")]
    EvaderWithoutChaser,
}
