//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "ICA_DATA_DIR";

/// Top-level ica configuration (`ica.toml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcaConfig {
    /// Directory holding the persisted collections.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Role the job board and quiz open with when no resume exists.
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Maximum number of postings the board shows.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    /// Optional TOML catalog replacing the built-in jobs and quizzes.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./.ica")
}
fn default_role() -> String {
    "Frontend Engineer".to_string()
}
fn default_display_limit() -> usize {
    6
}

impl Default for IcaConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_role: default_role(),
            display_limit: default_display_limit(),
            catalog: None,
        }
    }
}

/// Expand `${VAR}` references in a string. Unset variables expand to
/// nothing. Inserted values are not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let name = &rest[start + 2..start + 2 + len];
        result.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + 2 + len + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `ica.toml` in the current directory
/// 2. `~/.config/ica/config.toml`
///
/// `ICA_DATA_DIR` overrides `data_dir` from any file.
pub fn load_config() -> Result<IcaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<IcaConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("ica.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let parsed = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            parsed
        }
        None => IcaConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.catalog = config.catalog.as_deref().map(resolve_path);

    Ok(config)
}

/// Parse and check a config document.
pub fn parse_config_str(content: &str) -> Result<IcaConfig> {
    let config: IcaConfig = toml::from_str(content)?;
    anyhow::ensure!(config.display_limit >= 1, "display_limit must be at least 1");
    anyhow::ensure!(
        !config.default_role.trim().is_empty(),
        "default_role must not be empty"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("ica"))
}
