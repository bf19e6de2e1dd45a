//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use sched_core::Tick;
use sched_process::ProcessMap;
use sched_sim::SimObserver;

use crate::row::TickSummaryRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one tick summary per tick to any
/// [`OutputWriter`] backend and finishes the writer when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Borrow the writer, e.g. to write the history table after the run.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, processes: &ProcessMap) {
        let row = TickSummaryRow::from_processes(tick, processes);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _all_finished: bool) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
