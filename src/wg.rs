use anyhow::{Context, Result, anyhow};
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct StatusOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl StatusOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs `<status_command> show <wg_args...>` and buffers everything it prints.
///
/// `status_command` is the program followed by any leading arguments, normally just `["wg"]`.
pub async fn show(status_command: &[String], wg_args: &[String]) -> Result<StatusOutput> {
    let (program, leading) = status_command
        .split_first()
        .ok_or_else(|| anyhow!("status_command is empty"))?;

    debug!(program = %program, args = ?wg_args, "running status command");

    let output = Command::new(program)
        .args(leading)
        .arg("show")
        .args(wg_args)
        .output()
        .await
        .with_context(|| format!("Failed to run {}", program))?;

    Ok(StatusOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    })
}
