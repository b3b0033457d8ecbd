use anyhow::{Result as AnyResult, bail};
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::run::{self, CommandOutput};
use super::types::{ContainerSummary, DockerSettings, Filters, InspectRecord};

/// The container operations the orchestrator needs.
pub trait Engine {
    /// All containers (running or not) matching `filters`.
    fn list(&self, filters: &Filters) -> Result<Vec<ContainerSummary>>;

    /// Start the container with the given id or unique id prefix.
    fn start(&self, id: &str) -> Result<()>;

    /// Stop the container with the given id or unique id prefix.
    fn stop(&self, id: &str) -> Result<()>;
}

/// Verify that the Docker daemon is reachable. Returns the server version.
pub fn ensure_available(settings: &DockerSettings) -> AnyResult<String> {
    let out = run::capture(settings, ["version", "--format", "{{.Server.Version}}"])?;
    if !out.success {
        bail!("docker daemon is not reachable: {}", out.failure_reason());
    }
    Ok(out.stdout.trim().to_string())
}

/// [`Engine`] backed by the `docker` command-line client.
#[derive(Debug, Clone)]
pub struct DockerCli {
    settings: DockerSettings,
}

impl DockerCli {
    /// Check the daemon answers, then return a client bound to `settings`.
    pub fn connect(settings: DockerSettings) -> Result<Self> {
        let version = ensure_available(&settings)
            .map_err(|e| Error::EngineConnection(format!("{e:#}")))?;
        debug!(%version, binary = %settings.binary, "connected to docker");
        Ok(Self { settings })
    }

    /// Build a client without the reachability check.
    pub fn unchecked(settings: DockerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DockerSettings {
        &self.settings
    }

    fn lifecycle(&self, action: &'static str, id: &str) -> Result<()> {
        let out = run::capture(&self.settings, [action, id]).map_err(|e| Error::Action {
            action,
            id: id.to_string(),
            reason: format!("{e:#}"),
        })?;
        if !out.success {
            return Err(Error::Action {
                action,
                id: id.to_string(),
                reason: out.failure_reason(),
            });
        }
        debug!(action, id, "docker lifecycle call succeeded");
        Ok(())
    }

    fn capture_listing(&self, args: Vec<String>) -> Result<CommandOutput> {
        trace!(?args, "docker");
        let out = run::capture(&self.settings, &args)
            .map_err(|e| Error::ListFilter(format!("{e:#}")))?;
        if !out.success {
            return Err(Error::ListFilter(out.failure_reason()));
        }
        Ok(out)
    }
}

impl Engine for DockerCli {
    fn list(&self, filters: &Filters) -> Result<Vec<ContainerSummary>> {
        let listing = self.capture_listing(ps_args(filters))?;
        let ids: Vec<&str> = listing
            .stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        debug!(count = ids.len(), "containers matched filter");
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let args = inspect_args(&ids);
        trace!(?args, "docker");
        let inspected =
            run::capture(&self.settings, &args).map_err(|e| Error::ListFilter(format!("{e:#}")))?;
        inspected_containers(&inspected)
    }

    fn start(&self, id: &str) -> Result<()> {
        self.lifecycle("start", id)
    }

    fn stop(&self, id: &str) -> Result<()> {
        self.lifecycle("stop", id)
    }
}

/// `docker ps` arguments listing full ids of every container matching `filters`.
pub fn ps_args(filters: &Filters) -> Vec<String> {
    let mut args: Vec<String> = ["ps", "--all", "--quiet", "--no-trunc"]
        .into_iter()
        .map(String::from)
        .collect();
    args.extend(filters.to_args());
    args
}

/// `docker inspect` arguments for the given container ids.
pub fn inspect_args(ids: &[&str]) -> Vec<String> {
    let mut args: Vec<String> = ["inspect", "--type", "container"]
        .into_iter()
        .map(String::from)
        .collect();
    args.extend(ids.iter().map(|id| id.to_string()));
    args
}

/// Containers from a `docker inspect` run.
///
/// A container removed after `ps` makes `inspect` exit non-zero while still
/// printing the records it found; those are kept. Only unreadable output is
/// a listing failure.
fn inspected_containers(out: &CommandOutput) -> Result<Vec<ContainerSummary>> {
    match parse_inspect(&out.stdout) {
        Ok(containers) => {
            if !out.success {
                debug!(reason = %out.failure_reason(), kept = containers.len(), "partial inspect");
            }
            Ok(containers)
        }
        Err(e) if out.success => Err(Error::ListFilter(e.to_string())),
        Err(_) => Err(Error::ListFilter(out.failure_reason())),
    }
}

/// Decode the JSON array printed by `docker inspect`.
pub fn parse_inspect(json: &str) -> serde_json::Result<Vec<ContainerSummary>> {
    let records: Vec<InspectRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(ContainerSummary::from).collect())
}
