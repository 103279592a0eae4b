use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable pointing at an alternate config file
pub const CONFIG_PATH_ENV: &str = "DOORWAY_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub transitions: TransitionConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
}

/// Door clips, relative to the server's static root. An empty path disables that leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    #[serde(default = "default_close_clip")]
    pub close_clip: String,

    #[serde(default = "default_open_clip")]
    pub open_clip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub start_fullscreen: bool,

    #[serde(default)]
    pub show_controls: bool,

    #[serde(default = "default_refresh_notice_ms")]
    pub refresh_notice_ms: u64,
}

impl Config {
    /// Load from `$DOORWAY_CONFIG` or the user config directory, writing
    /// defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        let config_path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            debug!("Loading config from {:?}", config_path);
            let contents =
                fs::read_to_string(config_path).context("Failed to read config file")?;
            let config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            info!("Config loaded successfully");
            Ok(config)
        } else {
            info!("No config file found, using defaults");
            let config = Config::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents).context("Failed to write config file")?;

        debug!("Config saved to {:?}", config_path);
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("doorway").join("config.toml"))
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl TransitionConfig {
    pub fn close_clip(&self) -> Option<&str> {
        non_empty(&self.close_clip)
    }

    pub fn open_clip(&self) -> Option<&str> {
        non_empty(&self.open_clip)
    }
}

impl DisplayConfig {
    pub fn refresh_notice(&self) -> Duration {
        Duration::from_millis(self.refresh_notice_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: default_timeout(),
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            close_clip: default_close_clip(),
            open_clip: default_open_clip(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            start_fullscreen: false,
            show_controls: false,
            refresh_notice_ms: default_refresh_notice_ms(),
        }
    }
}

fn non_empty(path: &str) -> Option<&str> {
    let path = path.trim();
    if path.is_empty() { None } else { Some(path) }
}

// Default value functions
fn default_base_url() -> String { "http://127.0.0.1:5000".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_close_clip() -> String { "videos/Door Close.webm".to_string() }
fn default_open_clip() -> String { "videos/Door Open.webm".to_string() }
fn default_refresh_notice_ms() -> u64 { 1500 }
