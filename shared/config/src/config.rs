use serde::Deserialize;

/// One episode: arena, steering tunables, driver settings and the initial agents
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub world: World,
    #[serde(default)]
    pub steering: Steering,
    #[serde(default)]
    pub driver: Driver,
    pub agents: Vec<AgentDescriptor>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct World {
    /// Full width and height, centred on the origin
    pub arena: (f64, f64),
    pub timestep: f64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Steering {
    /// Smallest magnitude allowed for a flee denominator
    pub flee_epsilon: f64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Driver {
    pub max_steps: u64,
    /// Log agent state every n steps, 0 to disable
    pub log_every: u64,
    /// Number of isotropic scan rays to log before the first step, 0 to disable
    pub scan_rays: u32,
    /// Sleep for a timestep between steps
    pub realtime: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AgentDescriptor {
    pub role: AgentRole,
    pub pos: (f64, f64),
    #[serde(default)]
    pub vel: (f64, f64),
    /// Defaults to the standard agent radius
    #[serde(default)]
    pub radius: Option<f64>,
}

#[derive(Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum AgentRole {
    Chaser,
    Evader,
    Runner,
}

impl Default for Steering {
    fn default() -> Self {
        Self { flee_epsilon: 1e-3 }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            log_every: 50,
            scan_rays: 0,
            realtime: false,
        }
    }
}
