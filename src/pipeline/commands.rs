use crate::docker::{ContainerSummary, Filters};

use super::types::{ContainerRef, Mode};

/// Status filter for the list query in `mode`.
pub fn build_filter(mode: Mode) -> Filters {
    let mut filters = Filters::new();
    for status in mode.statuses() {
        filters.add("status", *status);
    }
    filters
}

/// Shape engine records into display records, preserving order.
pub fn to_refs(containers: &[ContainerSummary]) -> Vec<ContainerRef> {
    containers.iter().map(ContainerRef::from).collect()
}

/// Picker label: `"<short id>: <name>"`.
pub fn label(r: &ContainerRef) -> String {
    format!("{}: {}", r.short_id, r.display_name)
}
