mod keys;
mod state;

pub use keys::{KeyOutcome, handle_key};
pub use state::{Match, Picker};
