//! Server configuration.
//!
//! Defaults come from [`crate::constants`]; `SKI_WEATHER_*` environment
//! variables override them.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::constants::{DEFAULT_TIMEOUT_SECS, ENV_PREFIX, NWS_API_BASE, USER_AGENT};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the forecast API, without a trailing slash
    pub api_base: String,
    /// Sent with every request; api.weather.gov rejects anonymous clients
    pub user_agent: String,
    /// Timeout for a single outbound request
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: Environment) -> Result<Self, ConfigError> {
        let mut config: Self = Config::builder()
            .set_default("api_base", NWS_API_BASE)?
            .set_default("user_agent", USER_AGENT)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }
}
