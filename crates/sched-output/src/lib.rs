//! `sched-output`: simulation output writers for the CPU-scheduling simulator.
//!
//! One backend is provided:
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `history.csv`, `tick_summaries.csv`    |
//!
//! Backends implement [`OutputWriter`].  Per-tick summaries are driven by
//! [`SimOutputObserver`], which implements `sched_sim::SimObserver`; the
//! history table is written once the run is over.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sched_output::{CsvWriter, OutputWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.writer_mut().write_history(&sim.history_table())?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::TickSummaryRow;
pub use writer::OutputWriter;
