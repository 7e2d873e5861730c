//! TOML configuration with built-in defaults.
//!
//! Every section is optional; a missing file (no `--config` flag) yields
//! the defaults. Input length bounds are part of the engine's contract and
//! are not configurable here.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7700".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Ratio used when a request does not specify one.
    #[serde(default = "default_ratio")]
    pub default_ratio: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            default_ratio: default_ratio(),
        }
    }
}

fn default_ratio() -> f64 {
    0.3
}

/// Load configuration from an optional TOML file.
///
/// `None` returns the built-in defaults. Invalid values fail here rather
/// than at request time.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if !(config.summary.default_ratio > 0.0 && config.summary.default_ratio <= 1.0) {
        anyhow::bail!("summary.default_ratio must be in (0, 1]");
    }
    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:7700");
        assert_eq!(config.summary.default_ratio, 0.3);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let file = write_config("[server]\nbind = \"0.0.0.0:9000\"\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.summary.default_ratio, 0.3);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        let file = write_config("[summary]\ndefault_ratio = 1.5\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("default_ratio"));
    }

    #[test]
    fn empty_bind_is_rejected() {
        let file = write_config("[server]\nbind = \"  \"\n");
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/smx.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
