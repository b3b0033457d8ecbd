pub mod commands;
pub mod orchestrator;
mod types;

pub use commands::{build_filter, label, to_refs};
pub use orchestrator::run;
pub use types::{ContainerRef, Mode, RunConfig, SHORT_ID_LEN, Summary};
