//! Pursuit-evasion between point agents in a walled 2D arena.
//!
//! A [World] owns the agents and advances them one [step](World::step) at a time: steering picks
//! each agent's velocity, every agent moves by a timestep, and the [TerminationEvaluator] decides
//! whether the episode is over.

pub use agent::{Agent, Patch, Role, DEFAULT_RADIUS};
pub use arena::Arena;
pub use error::WorldError;
pub use sightlines::{isotropic_rays, trackback, Ray, Scan, TRACKBACK_SAMPLES};
pub use steer::{flee, seek, Flee, Seek, SteeringBehaviour, SteeringResult, DEFAULT_FLEE_EPSILON};
pub use termination::{TerminationEvaluator, TerminationReason};
pub use world::{AgentDescriptor, World, WorldState, DEFAULT_ARENA, DEFAULT_TIMESTEP};

mod agent;
mod arena;
mod error;
mod sightlines;
mod steer;
mod termination;
mod world;
