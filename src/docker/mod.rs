// Container engine access: the `Engine` capability and its docker CLI backend.

pub mod engine;
mod run;
pub mod types;

pub use engine::{DockerCli, Engine, ensure_available};
pub use types::{ContainerSummary, DockerSettings, Filters};
