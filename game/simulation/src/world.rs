use common::*;

use crate::sightlines::{isotropic_rays, trackback, Scan, TRACKBACK_SAMPLES};
use crate::steer::{SteeringBehaviour, SteeringResult, DEFAULT_FLEE_EPSILON};
use crate::{Agent, Arena, Patch, Role, TerminationEvaluator, TerminationReason, WorldError};
use crate::DEFAULT_RADIUS;

/// Full width and height
pub const DEFAULT_ARENA: (F, F) = (10.0, 10.0);
pub const DEFAULT_TIMESTEP: F = 0.02;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WorldState {
    Running,
    Terminated(TerminationReason),
}

slog_value_debug!(WorldState);

/// Initial state of an agent
#[derive(Debug, Clone)]
pub struct AgentDescriptor {
    pub role: Role,
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: F,
}

/// One pursuit episode. Holds a single quarry (an evader or a runner) and at most one chaser
pub struct World {
    arena: Arena,
    timestep: F,
    /// In creation order
    agents: Vec<Agent>,

    quarry: usize,
    chaser: Option<usize>,

    flee_epsilon: F,
    evaluator: TerminationEvaluator,
    state: WorldState,
    tick: u64,
}

impl AgentDescriptor {
    /// Stationary with the default radius
    pub fn new(role: Role, position: Vector2) -> Self {
        Self {
            role,
            position,
            velocity: Vector2::ZERO,
            radius: DEFAULT_RADIUS,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }
}

impl World {
    /// `width` and `height` are the full arena dimensions
    pub fn new(
        width: F,
        height: F,
        timestep: F,
        agents: impl IntoIterator<Item = AgentDescriptor>,
    ) -> Result<Self, WorldError> {
        let arena = Arena::new(width, height)?;

        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(WorldError::InvalidTimestep(timestep));
        }

        let agents = agents
            .into_iter()
            .map(|desc| Agent::new(desc.role, desc.position, desc.velocity, desc.radius))
            .collect::<Result<Vec<_>, _>>()?;

        let chaser = find_unique(&agents, Role::Chaser)?;
        let evader = find_unique(&agents, Role::Evader)?;
        let runner = find_unique(&agents, Role::Runner)?;

        let quarry = match (evader, runner) {
            (Some(_), Some(_)) => return Err(WorldError::ConflictingQuarry),
            (Some(_), None) if chaser.is_none() => return Err(WorldError::EvaderWithoutChaser),
            (Some(idx), None) | (None, Some(idx)) => idx,
            (None, None) => return Err(WorldError::MissingQuarry),
        };

        debug!("created world";
            "width" => width, "height" => height, "timestep" => timestep,
            "agents" => agents.len(), "quarry" => agents[quarry].role()
        );

        Ok(Self {
            arena,
            timestep,
            agents,
            quarry,
            chaser,
            flee_epsilon: DEFAULT_FLEE_EPSILON,
            evaluator: TerminationEvaluator,
            state: WorldState::Running,
            tick: 0,
        })
    }

    pub fn from_config(config: &config::Config) -> Result<Self, WorldError> {
        let (width, height) = config.world.arena;
        let agents = config.agents.iter().map(AgentDescriptor::from);

        Self::new(width, height, config.world.timestep, agents)?
            .with_flee_epsilon(config.steering.flee_epsilon)
    }

    /// Minimum magnitude of the flee denominators
    pub fn with_flee_epsilon(mut self, epsilon: F) -> Result<Self, WorldError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(WorldError::InvalidEpsilon(epsilon));
        }

        self.flee_epsilon = epsilon;
        Ok(self)
    }

    /// Steers, moves everything by a timestep, then checks for termination. Does nothing once
    /// terminated
    pub fn step(&mut self) -> WorldState {
        if let WorldState::Terminated(_) = self.state {
            return self.state;
        }

        // both steer from positions at the start of the step
        let chaser_steer = self.chaser.map(|idx| (idx, self.steer(idx)));
        let quarry_steer = (self.quarry, self.steer(self.quarry));

        for (idx, result) in chaser_steer.into_iter().chain(std::iter::once(quarry_steer)) {
            if let SteeringResult::Steer(vel) = result {
                self.agents[idx].set_velocity(vel);
            }
        }

        for agent in self.agents.iter_mut() {
            agent.advance(self.timestep);
        }

        self.tick += 1;
        trace!("stepped";
            "tick" => self.tick,
            "quarry" => self.quarry().patch(),
            "chaser" => ?self.chaser().map(Agent::position)
        );

        if let Some(reason) = self.evaluator.evaluate(&self.arena, self.quarry(), self.chaser()) {
            self.state = WorldState::Terminated(reason);
            info!("episode over"; "state" => self.state, "tick" => self.tick);
        }

        self.state
    }

    fn steer(&self, idx: usize) -> SteeringResult {
        let agent = &self.agents[idx];
        let target = if idx == self.quarry {
            self.chaser()
        } else {
            Some(self.quarry())
        };

        SteeringBehaviour::for_role(agent.role(), self.flee_epsilon).tick(agent, target, &self.arena)
    }

    /// Trackback line and `n` isotropic rays from the quarry, relative to the chaser
    pub fn scan(&self, n: usize) -> Option<Scan> {
        let from = self.quarry().position();
        let to = self.chaser()?.position();

        Some(Scan {
            trackback: trackback(from, to, TRACKBACK_SAMPLES).collect(),
            rays: isotropic_rays(from, to, n, &self.arena),
        })
    }

    pub fn patches(&self) -> impl Iterator<Item = (Role, Patch)> + '_ {
        self.agents.iter().map(|a| (a.role(), a.patch()))
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, role: Role) -> Option<&Agent> {
        self.agents.iter().find(|a| a.role() == role)
    }

    /// The evader or runner
    pub fn quarry(&self) -> &Agent {
        &self.agents[self.quarry]
    }

    pub fn chaser(&self) -> Option<&Agent> {
        self.chaser.map(|idx| &self.agents[idx])
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn timestep(&self) -> F {
        self.timestep
    }

    pub fn flee_epsilon(&self) -> F {
        self.flee_epsilon
    }

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, WorldState::Running)
    }

    /// Completed steps
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn elapsed(&self) -> F {
        self.tick as F * self.timestep
    }
}

fn find_unique(agents: &[Agent], role: Role) -> Result<Option<usize>, WorldError> {
    let mut found = agents.iter().positions(|a| a.role() == role);
    let first = found.next();
    if found.next().is_some() {
        return Err(WorldError::DuplicateRole(role));
    }

    Ok(first)
}

impl From<config::AgentRole> for Role {
    fn from(role: config::AgentRole) -> Self {
        match role {
            config::AgentRole::Chaser => Role::Chaser,
            config::AgentRole::Evader => Role::Evader,
            config::AgentRole::Runner => Role::Runner,
        }
    }
}

impl From<&config::AgentDescriptor> for AgentDescriptor {
    fn from(desc: &config::AgentDescriptor) -> Self {
        let (x, y) = desc.pos;
        let (vx, vy) = desc.vel;
        AgentDescriptor::new(desc.role.into(), dvec2(x, y))
            .with_velocity(dvec2(vx, vy))
            .with_radius(desc.radius.unwrap_or(DEFAULT_RADIUS))
    }
}

impl Default for World {
    /// Default arena with an evader at (1, 1) and a chaser at (-3, -2)
    fn default() -> Self {
        let (width, height) = DEFAULT_ARENA;
        let agents = [
            AgentDescriptor::new(Role::Evader, dvec2(1.0, 1.0)),
            AgentDescriptor::new(Role::Chaser, dvec2(-3.0, -2.0)),
        ];

        match Self::new(width, height, DEFAULT_TIMESTEP, agents) {
            Ok(world) => world,
            Err(e) => unreachable!("default world is valid: {}", e),
        }
    }
}
