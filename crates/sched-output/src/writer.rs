//! The `OutputWriter` trait implemented by backend writers.

use sched_sim::HistoryTable;

use crate::{OutputResult, TickSummaryRow};

/// Trait implemented by output backends.
///
/// Observer-driven calls are infallible from the sim's perspective: errors
/// are stored and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write the full history table.  Backends accept one table per writer.
    fn write_history(&mut self, table: &HistoryTable) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
