use std::error::Error;
use std::fmt::{Display, Formatter};

use slog::{Drain, Level};
use slog_async::AsyncGuard;
use slog_scope::GlobalLoggerGuard;

/// Environment variable holding the log level, e.g. `CHASE_LOG=trace`
pub const LOG_ENV_VAR: &str = "CHASE_LOG";

pub struct LoggerBuilder {
    level: Level,
}

/// Keeps the global logger installed until dropped, then flushes queued records
pub struct Logger(Level, GlobalLoggerGuard, AsyncGuard);

#[derive(Debug)]
pub enum LogError {
    BadLevel(String),
}

impl LoggerBuilder {
    pub fn with_env() -> Result<Self, LogError> {
        let mut builder = Self::default();

        if let Ok(env) = std::env::var(LOG_ENV_VAR) {
            let level = parse_level(&env)?;
            builder = builder.level(level)
        }

        Ok(builder)
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn init(self) -> Result<Logger, LogError> {
        let decorator = slog_term::TermDecorator::new().stderr().build();
        let drain = slog_term::CompactFormat::new(decorator).build().fuse();
        let drain = drain.filter_level(self.level).fuse();
        let (drain, flush) = slog_async::Async::new(drain)
            .thread_name("logging".to_owned())
            .chan_size(1024)
            .build_with_guard();
        let logger = slog::Logger::root(drain.fuse(), slog::o!());

        let global = slog_scope::set_global_logger(logger);
        Ok(Logger(self.level, global, flush))
    }
}

fn parse_level(s: &str) -> Result<Level, LogError> {
    s.parse().map_err(|_| LogError::BadLevel(s.to_owned()))
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self { level: Level::Info }
    }
}

impl Logger {
    pub fn level(&self) -> Level {
        self.0
    }
}

impl Display for LogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::BadLevel(s) => write!(f, "Invalid level {:?}", s),
        }
    }
}

impl Error for LogError {}
