use std::{
    env,
    fmt::{self, Display},
    sync::OnceLock,
};

use tracing_subscriber::EnvFilter;

use crate::{error::Result, Strategy};

pub const STRATEGY_VAR: &str = "PAIR_SUM_STRATEGY";
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    strategy: Strategy,
    log_level: String,
}

impl Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "strategy={} log_level={}", self.strategy, self.log_level)
    }
}

/// Process-wide config, read from the environment on first use.
/// Runs before the subscriber exists, so the caller logs the result.
pub fn get() -> Result<&'static Config> {
    static CELL: OnceLock<Config> = OnceLock::new();

    if let Some(config) = CELL.get() {
        return Ok(config);
    }

    let config = Config::from_env(|key| env::var(key).ok())?;
    Ok(CELL.get_or_init(|| config))
}

impl Config {
    pub fn from_env<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strategy = match var(STRATEGY_VAR) {
            Some(s) if !s.trim().is_empty() => s.parse()?,
            _ => Strategy::default(),
        };
        // An unparseable filter falls back to the default, log_level is the one applied
        let log_level = var(LOG_VAR)
            .filter(|l| !l.trim().is_empty() && EnvFilter::try_new(l).is_ok())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        Ok(Self { strategy, log_level })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}
