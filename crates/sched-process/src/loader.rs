//! CSV process loader.
//!
//! # CSV format
//!
//! One row per process.
//!
//! ```csv
//! id,priority,plan
//! A,90,3E
//! B,10,2E P 2E
//! ,50,random
//! ```
//!
//! | Column     | Meaning                                                  |
//! |------------|----------------------------------------------------------|
//! | `id`       | Process id; empty → next id from the factory's generator |
//! | `priority` | Integer in `[0, 100]`                                    |
//! | `plan`     | `random` (any case) → random walk; otherwise plan DSL    |
//!
//! A plan cell that parses to nothing yields an empty plan, so that process
//! is finished on its first tick.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sched_core::IdGenerator;
use sched_plan::parse_plan;

use crate::{Process, ProcessError, ProcessFactory, Transition};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProcessRecord {
    id:       String,
    priority: u32,
    plan:     String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load processes from a CSV file, in file order.
pub fn load_processes_csv<G: IdGenerator>(
    path:    &Path,
    factory: &mut ProcessFactory<G>,
) -> Result<Vec<Process>, ProcessError> {
    let file = std::fs::File::open(path).map_err(ProcessError::Io)?;
    load_processes_reader(file, factory)
}

/// Like [`load_processes_csv`] but accepts any `Read` source.
pub fn load_processes_reader<R: Read, G: IdGenerator>(
    reader:  R,
    factory: &mut ProcessFactory<G>,
) -> Result<Vec<Process>, ProcessError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut processes = Vec::new();
    for (line, result) in csv_reader.deserialize::<ProcessRecord>().enumerate() {
        let row = result.map_err(|e| ProcessError::Parse(e.to_string()))?;

        let priority = u8::try_from(row.priority)
            .ok()
            .filter(|&p| p <= 100)
            .ok_or_else(|| {
                ProcessError::Parse(format!(
                    "row {}: priority {} outside [0, 100]",
                    line + 1,
                    row.priority
                ))
            })?;

        let transition = parse_transition(&row.plan);
        let id = if row.id.is_empty() { factory.next_id() } else { row.id.into() };

        processes.push(Process::new(id, transition).with_priority(priority));
    }

    tracing::debug!(count = processes.len(), "loaded processes");
    Ok(processes)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_transition(cell: &str) -> Transition {
    if cell.eq_ignore_ascii_case("random") {
        Transition::RandomWalk
    } else {
        Transition::Planned(parse_plan(cell))
    }
}
