//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `history.csv`: `tick,<id>,<id>,…`, one row per tick, lowercase states
//! - `tick_summaries.csv`: `tick,executing,ready,pending,finished`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use sched_sim::HistoryTable;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    history:         Writer<File>,
    summaries:       Writer<File>,
    history_written: bool,
    finished:        bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir`.
    ///
    /// The summary header is written immediately; the history header depends
    /// on the process ids and is written with the table.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let history = Writer::from_path(dir.join("history.csv"))?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "executing", "ready", "pending", "finished"])?;

        Ok(Self {
            history,
            summaries,
            history_written: false,
            finished:        false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_history(&mut self, table: &HistoryTable) -> OutputResult<()> {
        if self.history_written {
            return Err(OutputError::HistoryWritten);
        }
        self.history_written = true;

        let mut header = vec!["tick".to_owned()];
        header.extend(table.ids().map(|id| id.as_str().to_owned()));
        self.history.write_record(&header)?;

        for (tick, _) in table.rows() {
            let mut record = vec![tick.0.to_string()];
            record.extend(table.ids().map(|id| {
                table.cell(tick, id).map(|s| s.as_str()).unwrap_or("").to_owned()
            }));
            self.history.write_record(&record)?;
        }
        // May be called after `finish`, so flush here too.
        self.history.flush()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.executing.to_string(),
            row.ready.to_string(),
            row.pending.to_string(),
            row.finished.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
