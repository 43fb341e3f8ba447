use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn config_path(config_dir: &Path, interface: &str) -> PathBuf {
    config_dir.join(format!("{}.conf", interface))
}

/// Reads a WireGuard config file fully into memory and splits it into lines.
pub async fn read_config_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().map(str::to_string).collect())
}
