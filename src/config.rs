use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration, loaded once at startup and immutable after.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// Listening socket settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// TCP port to listen on, bound on all interfaces.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pending-connection queue length for the listening socket.
    #[serde(default = "default_backlog")]
    pub backlog: u32,
}

/// Static file serving settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory all served files must live under.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_backlog() -> u32 {
    10
}

fn default_root() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            backlog: default_backlog(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `HEARTH_CONFIG`
    /// (default `hearth.yaml`). A missing file yields the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("HEARTH_CONFIG")
                .unwrap_or_else(|_| "hearth.yaml".to_string());

        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }

        Self::from_file(Path::new(&path))
    }

    /// Parses a YAML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}
