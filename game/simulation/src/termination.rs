use common::*;

use crate::{Agent, Arena};

/// Why an episode ended. Both are ordinary outcomes rather than errors
#[derive(Debug, Copy, Clone, Eq, PartialEq, derive_more::Display)]
pub enum TerminationReason {
    #[display(fmt = "out of bounds")]
    OutOfBounds,

    #[display(fmt = "caught")]
    Caught,
}

slog_value_display!(TerminationReason);

/// Checks end conditions after each step, out of bounds first. Only the quarry (evader or runner)
/// is bounds checked
#[derive(Default, Debug, Copy, Clone)]
pub struct TerminationEvaluator;

impl TerminationEvaluator {
    pub fn evaluate(
        &self,
        arena: &Arena,
        quarry: &Agent,
        chaser: Option<&Agent>,
    ) -> Option<TerminationReason> {
        if !arena.contains(quarry.position()) {
            return Some(TerminationReason::OutOfBounds);
        }

        match chaser {
            Some(chaser) if chaser.overlaps(quarry) => Some(TerminationReason::Caught),
            _ => None,
        }
    }
}
