use crate::docker::{ContainerSummary, DockerSettings};

/// Number of id characters shown and passed to start/stop.
pub const SHORT_ID_LEN: usize = 10;

/// Which direction the batch goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start stopped containers.
    Up,
    /// Stop running containers.
    Down,
}

impl Mode {
    /// Container states offered for selection in this mode.
    pub fn statuses(self) -> &'static [&'static str] {
        match self {
            Mode::Up => &["exited", "created", "paused", "dead"],
            Mode::Down => &["running"],
        }
    }

    /// Verb used for engine calls and error lines.
    pub fn action(self) -> &'static str {
        match self {
            Mode::Up => "start",
            Mode::Down => "stop",
        }
    }

    /// Progressive form used for success lines.
    pub fn progress(self) -> &'static str {
        match self {
            Mode::Up => "starting",
            Mode::Down => "stopping",
        }
    }
}

/// Everything a run needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub docker: DockerSettings,
}

/// Lightweight display record for one selectable container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub short_id: String,
    pub display_name: String,
}

impl From<&ContainerSummary> for ContainerRef {
    fn from(c: &ContainerSummary) -> Self {
        let short_id: String = c.id.chars().take(SHORT_ID_LEN).collect();

        // Engine names carry a leading `/`; drop exactly one character.
        let display_name = c
            .names
            .first()
            .map(|name| {
                let mut chars = name.chars();
                chars.next();
                chars.as_str().to_string()
            })
            .unwrap_or_default();

        Self {
            short_id,
            display_name,
        }
    }
}

/// Tally of the action loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, names: &[&str]) -> ContainerSummary {
        ContainerSummary {
            id: id.into(),
            names: names.iter().map(|n| n.to_string()).collect(),
            state: "exited".into(),
        }
    }

    #[test]
    fn up_offers_four_stopped_states() {
        assert_eq!(Mode::Up.statuses(), ["exited", "created", "paused", "dead"]);
    }

    #[test]
    fn down_offers_running_only() {
        assert_eq!(Mode::Down.statuses(), ["running"]);
    }

    #[test]
    fn verbs_match_mode() {
        assert_eq!(Mode::Up.action(), "start");
        assert_eq!(Mode::Down.action(), "stop");
        assert_eq!(Mode::Up.progress(), "starting");
        assert_eq!(Mode::Down.progress(), "stopping");
    }

    #[test]
    fn ref_truncates_id_and_strips_one_char() {
        let r = ContainerRef::from(&summary("abcdef1234567", &["/web"]));
        assert_eq!(r.short_id, "abcdef1234");
        assert_eq!(r.display_name, "web");
    }

    #[test]
    fn ref_strips_exactly_one_leading_char() {
        let r = ContainerRef::from(&summary("abc", &["//nested"]));
        assert_eq!(r.display_name, "/nested");
    }

    #[test]
    fn ref_uses_primary_name_only() {
        let r = ContainerRef::from(&summary("abc", &["/app", "/other/alias"]));
        assert_eq!(r.display_name, "app");
    }

    #[test]
    fn short_ids_and_missing_names_are_tolerated() {
        let r = ContainerRef::from(&summary("abc", &[]));
        assert_eq!(r.short_id, "abc");
        assert_eq!(r.display_name, "");
    }
}
