//! Console configuration
//!
//! Loaded from a TOML file. The path comes from `KAOS_CONSOLE_CONFIG` when
//! set, otherwise `~/.config/kaos-console/config.toml`. A missing file is
//! not an error; every field has a default.
//!
//! ```toml
//! role = "developer"
//! scripts_dir = "/srv/kaosnet/modules"
//! color = "auto"
//!
//! [theme]
//! keyword = "lightmagenta"
//! comment = "#6a737d"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::permissions::Role;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "KAOS_CONSOLE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Role the operator acts as
    pub role: Role,
    /// Directory scanned by `scripts` when no `--dir` is given
    pub scripts_dir: Option<PathBuf>,
    pub color: ColorMode,
    pub theme: ThemeConfig,
}

/// When to emit ANSI colors on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether stdout is a terminal
    pub fn enabled(&self, stdout_is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => stdout_is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Per-kind color overrides; unset entries keep the built-in theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub comment: Option<String>,
    pub string: Option<String>,
    pub keyword: Option<String>,
    pub number: Option<String>,
    pub call: Option<String>,
    pub plain: Option<String>,
}

impl Config {
    /// Load config from `path`, returning defaults if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {} (role: {})", path.display(), config.role);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Get the config file path (`$KAOS_CONSOLE_CONFIG` or the user config dir)
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kaos-console")
        .join("config.toml")
}
