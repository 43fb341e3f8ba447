use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::output::style::ColorMode;

const SETTINGS_FILE: &str = "wg-show/settings.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding `<interface>.conf`.
    pub config_dir: PathBuf,
    /// Program and leading arguments used to query status; `show` is appended.
    pub status_command: Vec<String>,
    pub color: ColorMode,
    pub table: TableWidths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("/etc/wireguard"),
            status_command: vec!["wg".to_string()],
            color: ColorMode::Auto,
            table: TableWidths::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableWidths {
    pub nickname: usize,
    pub maintainer: usize,
    pub group: usize,
    pub endpoint: usize,
    pub handshake: usize,
}

impl Default for TableWidths {
    fn default() -> Self {
        Self {
            nickname: 20,
            maintainer: 15,
            group: 15,
            endpoint: 30,
            handshake: 20,
        }
    }
}

impl Settings {
    /// Loads settings from an explicit path, or from the per-user default location.
    ///
    /// A missing default file yields defaults. An explicit path must exist.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path).await,
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path).await,
                _ => {
                    debug!("no settings file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("Invalid settings: {}", path.display()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }
}

fn default_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;
    Some(base.join(SETTINGS_FILE))
}
