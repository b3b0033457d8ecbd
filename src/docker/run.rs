use std::ffi::OsStr;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use super::types::DockerSettings;

/// Captured result of one `docker` invocation.
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Best human-readable reason for a failed invocation.
    pub fn failure_reason(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.exit_code {
            Some(code) => format!("docker exited with status {code}"),
            None => "docker was terminated by a signal".to_string(),
        }
    }
}

/// Base command for the configured binary, with the global `--host` applied.
pub fn command(settings: &DockerSettings) -> Command {
    let mut cmd = Command::new(&settings.binary);
    if let Some(host) = &settings.host {
        cmd.arg("--host").arg(host);
    }
    cmd.stdin(Stdio::null());
    cmd
}

/// Run `docker <args>` to completion and capture both streams.
///
/// Only failing to spawn is an `Err`; a non-zero exit is reported through
/// [`CommandOutput::success`].
pub fn capture<I, S>(settings: &DockerSettings, args: I) -> Result<CommandOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = command(settings)
        .args(args)
        .output()
        .with_context(|| {
            format!(
                "failed to invoke `{}`: is it installed and on PATH?",
                settings.binary
            )
        })?;

    Ok(CommandOutput {
        success: output.status.success(),
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
