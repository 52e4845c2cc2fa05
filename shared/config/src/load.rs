use std::borrow::Cow;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};
use once_cell::sync::OnceCell;

use common::*;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parsing(#[from] ron::de::Error),

    #[error("Config has already been initialized")]
    AlreadyInitialized,

    #[error("Config has not been initialized")]
    Uninitialized,
}

type ConfigResult<T> = std::result::Result<T, ConfigError>;

pub enum ConfigType<'a> {
    String(&'a str),
    File(&'a Path),
}

static CONFIG: OnceCell<ArcSwap<Config>> = OnceCell::new();

/// Parses a config without touching the global instance
pub fn load(cfg: ConfigType) -> ConfigResult<Config> {
    cfg.load()
}

/// Must be called once only, and before [get]
pub fn init(cfg: ConfigType) -> ConfigResult<()> {
    // parse config and fail early
    let config = cfg.load()?;

    CONFIG
        .set(ArcSwap::from_pointee(config))
        .map_err(|_| ConfigError::AlreadyInitialized)?;

    debug!("initialized config");
    Ok(())
}

/// Replaces the global config, which must already be initialized. Readers holding the old
/// instance keep it until they drop it
pub fn reload(cfg: ConfigType) -> ConfigResult<()> {
    let global = CONFIG.get().ok_or(ConfigError::Uninitialized)?;
    let config = cfg.load()?;

    let new = Arc::new(config);
    let new_ptr = Arc::as_ptr(&new);
    let old = global.swap(new);
    let old_ptr = Arc::as_ptr(&old);

    debug!("swapped config instance"; "new" => ?new_ptr, "old" => ?old_ptr);
    Ok(())
}

pub fn get() -> ConfigResult<impl Deref<Target = Config>> {
    let cfg = CONFIG.get().ok_or(ConfigError::Uninitialized)?;
    Ok(Guard::into_inner(cfg.load()))
}

impl<'a> ConfigType<'a> {
    fn load(&self) -> ConfigResult<Config> {
        let bytes = match self {
            ConfigType::String(s) => Cow::Borrowed(*s),
            ConfigType::File(path) => {
                let contents = std::fs::read_to_string(*path)?;
                Cow::Owned(contents)
            }
        };

        ron::de::from_str(&bytes).map_err(ConfigError::Parsing)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::AgentRole;

    const MINIMAL: &str = r#"
        (
            world: (arena: (8.0, 6.0), timestep: 0.05),
            agents: [
                (role: Runner, pos: (1.0, -1.0), vel: (1.0, 0.0)),
            ],
        )
    "#;

    #[test]
    fn defaults_fill_missing_sections() {
        let config = load(ConfigType::String(MINIMAL)).expect("should parse");

        assert_eq!(config.world.arena, (8.0, 6.0));
        assert_eq!(config.world.timestep, 0.05);
        assert_eq!(config.steering.flee_epsilon, 1e-3);
        assert_eq!(config.driver.max_steps, 10_000);
        assert!(!config.driver.realtime);

        let runner = &config.agents[0];
        assert_eq!(runner.role, AgentRole::Runner);
        assert_eq!(runner.vel, (1.0, 0.0));
        assert_eq!(runner.radius, None);
    }

    #[test]
    fn partial_sections() {
        let partial = MINIMAL.replace(
            "agents:",
            "driver: (max_steps: 5), steering: (), agents:",
        );
        let config = load(ConfigType::String(&partial)).expect("should parse");

        assert_eq!(config.driver.max_steps, 5);
        assert_eq!(config.driver.log_every, 50);
        assert_eq!(config.driver.scan_rays, 0);
        assert!(!config.driver.realtime);
        assert_eq!(config.steering.flee_epsilon, 1e-3);
    }

    #[test]
    fn bad_config() {
        let err = load(ConfigType::String("(world: ())")).unwrap_err();
        assert!(matches!(err, ConfigError::Parsing(_)), "{:?}", err);

        let err = load(ConfigType::File(Path::new("/definitely/not/here.ron"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "{:?}", err);
    }

    #[test]
    fn shipped_config() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources/chase.ron");
        let config = load(ConfigType::File(&path)).expect("shipped config should parse");

        assert_eq!(config.world.arena, (10.0, 10.0));
        assert_eq!(config.world.timestep, 0.02);
        assert_eq!(config.agents.len(), 2);
    }

    #[test]
    fn global_lifecycle() {
        // only test touching the global instance
        init(ConfigType::String(MINIMAL)).expect("first init");
        assert!(matches!(
            init(ConfigType::String(MINIMAL)),
            Err(ConfigError::AlreadyInitialized)
        ));
        assert_eq!(get().expect("initialized").world.timestep, 0.05);

        let bigger = MINIMAL.replace("0.05", "0.1");
        reload(ConfigType::String(&bigger)).expect("reload");
        assert_eq!(get().expect("initialized").world.timestep, 0.1);
    }
}
