use super::keymap::KeyConfig;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub smooth_scroll: bool,
    /// Rows moved per mouse wheel notch.
    pub scroll_step: u16,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: PaletteType::Dark,
            smooth_scroll: true,
            scroll_step: 3,
            keys: KeyConfig::default(),
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("mkdocs-tui");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub fn parse_config(raw: &str) -> Result<Config> {
    toml::from_str(raw).context("parsing configuration")
}

/// Loads the configuration. A missing file yields the defaults; an
/// unreadable or malformed one is logged and also yields the defaults.
pub fn load_config(path: Option<&Path>) -> Config {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => return Config::default(),
    };
    if !path.exists() {
        return Config::default();
    }
    match read_config(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), "using default configuration: {e:#}");
            Config::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&raw)
}
