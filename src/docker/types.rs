use std::collections::BTreeMap;

use serde::Deserialize;

/// How to reach the docker CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerSettings {
    /// Binary name or path.
    pub binary: String,
    /// Forwarded as `docker --host <url>` when set.
    pub host: Option<String>,
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            binary: "docker".to_string(),
            host: None,
        }
    }
}

/// Key/value constraints for a container list query.
///
/// Values registered under the same key are OR-ed by the engine, so
/// `status=exited` plus `status=dead` matches either state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, Vec<String>>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under `key`. Duplicate values are ignored.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let values = self.0.entry(key.into()).or_default();
        let value = value.into();
        if !values.contains(&value) {
            values.push(value);
        }
    }

    /// Values for `key` in insertion order.
    pub fn get(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as repeated `--filter key=value` CLI arguments.
    pub fn to_args(&self) -> Vec<String> {
        self.0
            .iter()
            .flat_map(|(key, values)| {
                values
                    .iter()
                    .flat_map(move |value| ["--filter".to_string(), format!("{key}={value}")])
            })
            .collect()
    }
}

/// A container as reported by the engine, before any display shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Full engine-assigned id.
    pub id: String,
    /// Engine names, each with its leading `/`.
    pub names: Vec<String>,
    /// Lifecycle state (`running`, `exited`, ...).
    pub state: String,
}

/// The subset of a `docker inspect` element that we read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InspectRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: InspectState,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InspectState {
    #[serde(default)]
    pub status: String,
}

impl From<InspectRecord> for ContainerSummary {
    fn from(record: InspectRecord) -> Self {
        let names = if record.name.is_empty() {
            Vec::new()
        } else {
            vec![record.name]
        };
        Self {
            id: record.id,
            names,
            state: record.state.status,
        }
    }
}
