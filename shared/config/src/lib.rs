pub use crate::config::*;
pub use crate::load::{get, init, load, reload, ConfigError, ConfigType};

mod config;
mod load;
