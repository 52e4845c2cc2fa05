use common::*;

use crate::steer::{flee, seek, DEFAULT_FLEE_EPSILON};
use crate::{Agent, Arena, Role};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SteeringBehaviour {
    Nop(Nop),
    Seek(Seek),
    Flee(Flee),
}

/// Outcome of a single steering tick
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SteeringResult {
    /// Replace the velocity with this unit vector
    Steer(Vector2),

    /// Geometry was degenerate or there was nothing to steer by, keep the current velocity
    Keep,
}

impl Default for SteeringBehaviour {
    fn default() -> Self {
        Self::Nop(Nop)
    }
}

impl SteeringBehaviour {
    pub fn for_role(role: Role, flee_epsilon: F) -> Self {
        match role {
            Role::Chaser => Self::Seek(Seek),
            Role::Evader => Self::Flee(Flee::with_epsilon(flee_epsilon)),
            Role::Runner => Self::Nop(Nop),
        }
    }

    /// `target` is the agent being chased or fled from
    pub fn tick(&self, agent: &Agent, target: Option<&Agent>, arena: &Arena) -> SteeringResult {
        match self {
            SteeringBehaviour::Nop(behaviour) => behaviour.tick(agent, target, arena),
            SteeringBehaviour::Seek(behaviour) => behaviour.tick(agent, target, arena),
            SteeringBehaviour::Flee(behaviour) => behaviour.tick(agent, target, arena),
        }
    }

    pub fn is_nop(&self) -> bool {
        matches!(self, SteeringBehaviour::Nop(_))
    }
}

trait DoASteer {
    fn tick(&self, agent: &Agent, target: Option<&Agent>, arena: &Arena) -> SteeringResult;
}

impl From<Option<Vector2>> for SteeringResult {
    fn from(vel: Option<Vector2>) -> Self {
        match vel {
            Some(vel) => SteeringResult::Steer(vel),
            None => SteeringResult::Keep,
        }
    }
}

// keep going
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Nop;

impl DoASteer for Nop {
    fn tick(&self, _: &Agent, _: Option<&Agent>, _: &Arena) -> SteeringResult {
        SteeringResult::Keep
    }
}

/// Pure pursuit at unit speed towards the target's current position
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub struct Seek;

impl DoASteer for Seek {
    fn tick(&self, agent: &Agent, target: Option<&Agent>, _: &Arena) -> SteeringResult {
        let target = match target {
            Some(t) => t,
            None => return SteeringResult::Keep,
        };

        let result = SteeringResult::from(seek(agent.position(), target.position()));
        if let SteeringResult::Keep = result {
            trace!("seek target is on top of us, keeping velocity"; "role" => agent.role());
        }
        result
    }
}

/// Steepest descent away from the target and the arena walls
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Flee {
    epsilon: F,
}

impl Flee {
    pub fn with_epsilon(epsilon: F) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> F {
        self.epsilon
    }
}

impl Default for Flee {
    fn default() -> Self {
        Self::with_epsilon(DEFAULT_FLEE_EPSILON)
    }
}

impl DoASteer for Flee {
    fn tick(&self, agent: &Agent, target: Option<&Agent>, arena: &Arena) -> SteeringResult {
        let target = match target {
            Some(t) => t,
            None => return SteeringResult::Keep,
        };

        let result =
            SteeringResult::from(flee(agent.position(), target.position(), arena, self.epsilon));
        if let SteeringResult::Keep = result {
            trace!("flee repulsion cancelled out, keeping velocity"; "role" => agent.role());
        }
        result
    }
}
