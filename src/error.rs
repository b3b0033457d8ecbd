use thiserror::Error;

/// Everything that can go wrong between parsing the mode and the last
/// start/stop call.
#[derive(Debug, Error)]
pub enum Error {
    /// The docker binary is missing or the daemon did not answer.
    #[error("cannot reach the container engine: {0}")]
    EngineConnection(String),

    /// The filtered list query failed or returned something unreadable.
    #[error("failed to list containers: {0}")]
    ListFilter(String),

    /// The filter matched nothing.
    #[error("no matching container found")]
    NotFound,

    /// The operator left the picker without confirming.
    #[error("selection cancelled")]
    SelectionCancelled,

    /// A single start or stop call failed. Recovered inside the batch.
    #[error("failed to {action} container {id}: {reason}")]
    Action {
        action: &'static str,
        id: String,
        reason: String,
    },

    /// The picker could not set up or drive the terminal.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_error_names_verb_and_id() {
        let err = Error::Action {
            action: "stop",
            id: "abcdef1234".into(),
            reason: "no such container".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to stop container abcdef1234: no such container"
        );
    }

    #[test]
    fn io_errors_become_terminal_errors() {
        let io = std::io::Error::other("not a tty");
        let err: Error = io.into();
        assert!(matches!(err, Error::Terminal(_)));
    }
}
