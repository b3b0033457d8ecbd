use std::io::Write;

use tracing::{debug, info, warn};

use crate::docker::Engine;
use crate::error::{Error, Result};
use crate::select::{Selection, Selector};

use super::commands::{build_filter, label, to_refs};
use super::types::{ContainerRef, Mode, RunConfig, Summary};

/// Filter, list, pick, then start or stop each picked container in order.
///
/// Success lines go to `out` and per-item failures to `err`; a failed item
/// never aborts the batch. Errors are returned only for the listing (engine
/// failure or nothing matched) and for a cancelled selection.
pub fn run<E, S, O, W>(
    config: &RunConfig,
    engine: &E,
    selector: &mut S,
    out: &mut O,
    err: &mut W,
) -> Result<Summary>
where
    E: Engine + ?Sized,
    S: Selector,
    O: Write + ?Sized,
    W: Write + ?Sized,
{
    let mode = config.mode;

    let filters = build_filter(mode);
    let containers = engine.list(&filters)?;
    if containers.is_empty() {
        return Err(Error::NotFound);
    }
    debug!(count = containers.len(), ?mode, "containers offered for selection");

    let refs = to_refs(&containers);

    let picked = match selector.select(refs.as_slice(), label)? {
        Selection::Confirmed(indices) => indices,
        Selection::Cancelled => return Err(Error::SelectionCancelled),
    };

    let mut summary = Summary::default();
    for index in picked {
        let Some(target) = refs.get(index) else {
            warn!(index, "selector returned an index outside the list");
            continue;
        };
        summary.total += 1;
        match apply(engine, mode, target) {
            Ok(()) => {
                summary.succeeded += 1;
                report(
                    out,
                    format_args!("{} container: {}", mode.progress(), target.display_name),
                );
            }
            Err(e) => {
                summary.failed += 1;
                warn!(error = %e, "container action failed");
                // Start failures name the id, stop failures the name.
                let subject = match mode {
                    Mode::Up => &target.short_id,
                    Mode::Down => &target.display_name,
                };
                report(
                    err,
                    format_args!("failed to {} container: {subject}", mode.action()),
                );
            }
        }
    }

    info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}

fn apply<E: Engine + ?Sized>(engine: &E, mode: Mode, target: &ContainerRef) -> Result<()> {
    match mode {
        Mode::Up => engine.start(&target.short_id),
        Mode::Down => engine.stop(&target.short_id),
    }
}

/// Status lines are best effort: a closed pipe must not abort the batch.
fn report<W: Write + ?Sized>(w: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(w, "{line}") {
        debug!(error = %e, "could not write status line");
    }
}
