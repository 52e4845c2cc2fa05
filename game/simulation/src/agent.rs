use common::*;

use crate::WorldError;

/// Radius given to agents that don't specify one
pub const DEFAULT_RADIUS: F = 0.2;

/// Decides which steering applies to an agent
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, derive_more::Display)]
pub enum Role {
    /// Seeks the evader or runner
    Chaser,
    /// Flees the chaser and the walls
    Evader,
    /// No steering, keeps its initial velocity
    Runner,
}

slog_value_display!(Role);

/// Point body moving at constant velocity between steering updates
#[derive(Debug, Clone)]
pub struct Agent {
    role: Role,
    position: Vector2,
    /// Unit length once steered, or zero before the first steer
    velocity: Vector2,
    radius: F,
}

/// Read-only snapshot for rendering
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Patch {
    pub position: Vector2,
    pub radius: F,
}

slog_value_debug!(Patch);

impl Agent {
    pub fn new(role: Role, position: Vector2, velocity: Vector2, radius: F) -> Result<Self, WorldError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(WorldError::InvalidRadius(radius));
        }

        if !common::vector::is_finite(position) {
            return Err(WorldError::NonFinite("position"));
        }

        if !common::vector::is_finite(velocity) {
            return Err(WorldError::NonFinite("velocity"));
        }

        Ok(Self {
            role,
            position,
            velocity,
            radius,
        })
    }

    /// Moves by `velocity * dt` with no bounds clamping
    pub fn advance(&mut self, dt: F) {
        self.position += self.velocity * dt;
    }

    /// Not normalized here
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn patch(&self) -> Patch {
        Patch {
            position: self.position,
            radius: self.radius,
        }
    }

    /// Euclidean distance between centres
    pub fn separation(&self, other: &Agent) -> F {
        self.position.distance(other.position)
    }

    /// Bounding circles strictly overlap, touching doesn't count
    pub fn overlaps(&self, other: &Agent) -> bool {
        self.separation(other) < self.radius + other.radius
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub const fn position(&self) -> Vector2 {
        self.position
    }

    pub const fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub const fn radius(&self) -> F {
        self.radius
    }
}
