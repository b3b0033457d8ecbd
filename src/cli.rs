use clap::{ArgAction, Parser};

use crate::docker::DockerSettings;
use crate::pipeline::{Mode, RunConfig};

/// Fuzzy-pick containers and bulk start or stop them.
#[derive(Parser, Debug)]
#[command(name = "dockpick", version, about, long_about = None)]
pub struct Cli {
    /// Start stopped containers (exited, created, paused, dead).
    #[arg(short = 'u', long)]
    pub up: bool,

    /// Stop running containers.
    #[arg(short = 'd', long)]
    pub down: bool,

    /// More log output on stderr (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Docker client binary to invoke.
    #[arg(long, value_name = "PATH", default_value = "docker")]
    pub docker: String,

    /// Engine endpoint, forwarded as `docker --host`.
    #[arg(short = 'H', long, value_name = "URL")]
    pub host: Option<String>,
}

impl Cli {
    /// Requested mode. `--up` wins when both flags are given.
    pub fn mode(&self) -> Option<Mode> {
        if self.up {
            Some(Mode::Up)
        } else if self.down {
            Some(Mode::Down)
        } else {
            None
        }
    }

    /// Resolve flags into the explicit run configuration. `None` when no
    /// mode was requested.
    pub fn run_config(&self) -> Option<RunConfig> {
        Some(RunConfig {
            mode: self.mode()?,
            docker: DockerSettings {
                binary: self.docker.clone(),
                host: self.host.clone(),
            },
        })
    }
}
