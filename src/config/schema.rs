use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,
}

// ── Chat engine ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Artificial reply latency in milliseconds (default: 1500)
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// Fixed RNG seed for deterministic replies (default: unseeded)
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Seed the opening assistant message on chat surfaces (default: true)
    #[serde(default = "default_true")]
    pub welcome: bool,
}

fn default_response_delay_ms() -> u64 {
    1500
}

fn default_true() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            rng_seed: None,
            welcome: default_true(),
        }
    }
}

// ── Gateway ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway host (default: 127.0.0.1)
    #[serde(default = "default_gateway_host")]
    pub host: String,
    /// Gateway port (default: 3000)
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

fn default_gateway_host() -> String {
    "127.0.0.1".into()
}

fn default_gateway_port() -> u16 {
    3000
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────

impl Config {
    /// Load `~/.treadgpt/config.toml`, writing a default one on first run.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let user_dirs = UserDirs::new().ok_or(ConfigError::NoHome)?;
        Self::load_or_init_at(user_dirs.home_dir().join(".treadgpt"))
    }

    /// Same as [`Config::load_or_init`] against an explicit workspace
    /// directory.
    pub fn load_or_init_at(workspace_dir: PathBuf) -> Result<Self, ConfigError> {
        let config_path = workspace_dir.join("config.toml");

        let mut config: Config = if config_path.exists() {
            let raw = fs::read_to_string(&config_path).map_err(|error| ConfigError::Load {
                path: config_path.display().to_string(),
                message: error.to_string(),
            })?;
            toml::from_str(&raw).map_err(|error| ConfigError::Parse {
                path: config_path.display().to_string(),
                message: error.to_string(),
            })?
        } else {
            fs::create_dir_all(&workspace_dir)?;
            let config = Config::default();
            let raw = toml::to_string_pretty(&config).map_err(|error| ConfigError::Init {
                path: config_path.display().to_string(),
                message: error.to_string(),
            })?;
            fs::write(&config_path, raw)?;
            config
        };

        config.workspace_dir = workspace_dir;
        config.config_path = config_path;
        Ok(config)
    }

    /// The artificial reply latency as a `Duration`.
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.chat.response_delay_ms)
    }
}
