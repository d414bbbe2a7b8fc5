use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read by [`Config::load`] unless `ROOTSERVE_CONFIG` names another.
pub const DEFAULT_CONFIG_FILE: &str = "rootserve.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds a client gets to deliver its request head.
    pub connection_timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub webroot: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 10000,
            connection_timeout_secs: 3,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            webroot: PathBuf::from("webroot"),
        }
    }
}

impl Config {
    /// Reads the optional YAML file, then applies `ROOTSERVE_*` environment
    /// overrides.
    ///
    /// A missing default file is fine; a missing file named explicitly
    /// through `ROOTSERVE_CONFIG` is an error.
    pub fn load() -> anyhow::Result<Self> {
        let cfg = match std::env::var("ROOTSERVE_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };

        cfg.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Applies overrides looked up by variable name.
    pub fn apply_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("ROOTSERVE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ROOTSERVE_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("ROOTSERVE_PORT is not a valid port: {}", port))?;
        }
        if let Some(webroot) = lookup("ROOTSERVE_WEBROOT") {
            self.static_files.webroot = PathBuf::from(webroot);
        }
        if let Some(secs) = lookup("ROOTSERVE_TIMEOUT_SECS") {
            self.server.connection_timeout_secs = secs
                .parse()
                .with_context(|| format!("ROOTSERVE_TIMEOUT_SECS is not a number: {}", secs))?;
        }
        Ok(self)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.server.connection_timeout_secs)
    }
}
