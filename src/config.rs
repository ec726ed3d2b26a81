//! Server configuration

use std::{fmt, path::PathBuf};

use url::Url;

use crate::{
    protocol::error::{A2AError, A2AResult},
    transport::http::DEFAULT_BASE_URL,
};

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
/// Environment variable holding the listen port
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the agent card location
pub const AGENT_CARD_VAR: &str = "AGENT_CARD_PATH";
/// Environment variable overriding the provider base URL
pub const BASE_URL_VAR: &str = "MAPS_API_BASE_URL";

/// Port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;
/// Agent card location used when `AGENT_CARD_PATH` is unset
pub const DEFAULT_AGENT_CARD: &str = "agent.json";

/// Configuration for the maps agent server
#[derive(Clone)]
pub struct ServerConfig {
    /// Provider credential
    pub api_key: String,

    /// TCP port to listen on, all interfaces
    pub port: u16,

    /// Path of the agent card document
    pub agent_card_path: PathBuf,

    /// Provider base URL
    pub base_url: Url,
}

impl ServerConfig {
    /// Create a new configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> A2AResult<Self> {
        Ok(Self {
            api_key: api_key.into(),
            port: DEFAULT_PORT,
            agent_card_path: PathBuf::from(DEFAULT_AGENT_CARD),
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
        })
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> A2AResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through a variable lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> A2AResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = var(API_KEY_VAR).ok_or_else(|| {
            A2AError::Initialization(format!("{} is not set", API_KEY_VAR))
        })?;
        let mut config = Self::new(api_key)?;

        if let Some(port) = var(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| {
                A2AError::Initialization(format!("{} is not a valid port: {}", PORT_VAR, port))
            })?;
        }
        if let Some(path) = var(AGENT_CARD_VAR) {
            config.agent_card_path = PathBuf::from(path);
        }
        if let Some(base_url) = var(BASE_URL_VAR) {
            config.base_url = parse_base_url(&base_url)?;
        }

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> A2AResult<Url> {
    Url::parse(raw)
        .map_err(|e| A2AError::Initialization(format!("invalid {} {}: {}", BASE_URL_VAR, raw, e)))
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("port", &self.port)
            .field("agent_card_path", &self.agent_card_path)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
