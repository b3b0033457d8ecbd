pub mod app;
pub mod cli;
pub mod docker;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod select;
pub mod ui;

pub use error::{Error, Result};
