//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::registry::IdPolicy;

/// Top-level kangoo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KangooConfig {
    /// How new participants get their id.
    #[serde(default)]
    pub id_policy: IdPolicy,
    /// Reject submits with a blank first or last name.
    #[serde(default)]
    pub require_names: bool,
    /// Color club and day cells in terminal output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for KangooConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            require_names: false,
            color: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `kangoo.toml` in the current directory
/// 2. `~/.config/kangoo/config.toml`
///
/// Environment variable override: `KANGOO_ID_POLICY` (ignored when empty).
pub fn load_config_from(path: Option<&Path>) -> Result<KangooConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("kangoo.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::info!("loaded config from {}", path.display());
            config
        }
        None => KangooConfig::default(),
    };

    if let Some(policy) = env_policy()? {
        config.id_policy = policy;
    }

    Ok(config)
}

fn env_policy() -> Result<Option<IdPolicy>> {
    match std::env::var("KANGOO_ID_POLICY") {
        Ok(value) => parse_policy_override(&value),
        Err(_) => Ok(None),
    }
}

/// Parse a `KANGOO_ID_POLICY` value. Blank values count as unset.
fn parse_policy_override(value: &str) -> Result<Option<IdPolicy>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|e: String| anyhow::anyhow!("KANGOO_ID_POLICY: {e}"))
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<KangooConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("kangoo"))
}
