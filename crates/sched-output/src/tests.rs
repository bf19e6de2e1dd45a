//! Integration tests for sched-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use sched_core::{ProcessId, ProcessState, SimConfig, Tick};
    use sched_plan::parse_plan;
    use sched_policy::{Fcfs, SimState};
    use sched_process::{Process, ProcessMap, Transition};
    use sched_sim::{HistoryTable, execute};

    use crate::csv::CsvWriter;
    use crate::row::TickSummaryRow;
    use crate::writer::OutputWriter;
    use crate::OutputError;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn planned(id: &str, dsl: &str) -> Process {
        Process::new(id, Transition::Planned(parse_plan(dsl)))
    }

    fn fcfs_table() -> HistoryTable {
        let initial = SimState::new(vec![planned("P2", "2E"), planned("P1", "2E")]);
        execute(Fcfs, initial, &SimConfig::default())
    }

    fn read_all(path: std::path::PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("history.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn summary_header_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(dir.path().join("tick_summaries.csv"));
        assert_eq!(headers, ["tick", "executing", "ready", "pending", "finished"]);
        assert!(rows.is_empty());
    }

    #[test]
    fn history_table_layout() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_history(&fcfs_table()).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(dir.path().join("history.csv"));
        assert_eq!(headers, ["tick", "P1", "P2"]);
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "executing");
        assert_eq!(&rows[0][2], "ready");
        assert_eq!(&rows[4][0], "5");
        assert_eq!(&rows[4][1], "finished");
        assert_eq!(&rows[4][2], "finished");
    }

    #[test]
    fn history_written_once() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let table = fcfs_table();
        w.write_history(&table).unwrap();
        assert!(matches!(w.write_history(&table), Err(OutputError::HistoryWritten)));
    }

    #[test]
    fn history_after_finish_is_flushed() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.write_history(&fcfs_table()).unwrap();

        let (_, rows) = read_all(dir.path().join("history.csv"));
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn tick_summary_counts_states() {
        let mut processes = ProcessMap::new();
        for p in [planned("a", "E"), planned("b", "E"), planned("c", "P")] {
            processes.insert(p.id.clone(), p);
        }
        let mut a = processes.remove(&ProcessId::from("a")).unwrap();
        a = a.advance(ProcessState::Executing);
        processes.insert(a.id.clone(), a);

        let row = TickSummaryRow::from_processes(Tick(1), &processes);
        assert_eq!(row, TickSummaryRow { tick: 1, executing: 1, ready: 2, pending: 0, finished: 0 });
    }

    #[test]
    fn tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow { tick: 3, executing: 1, ready: 2, pending: 4, finished: 5 };
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let (_, rows) = read_all(dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "1", "2", "4", "5"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn integration_csv() {
        use sched_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let mut sim = SimBuilder::new(SimConfig::default(), Fcfs)
            .processes([planned("P1", "2E"), planned("P2", "2E")])
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs);
        obs.writer_mut().write_history(&sim.history_table()).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // One summary per tick; the run halts at tick 5.
        let (_, summaries) = read_all(dir.path().join("tick_summaries.csv"));
        assert_eq!(summaries.len(), 5);
        assert_eq!(&summaries[2][0], "3");
        assert_eq!(&summaries[2][1], "1"); // P2 executing
        assert_eq!(&summaries[2][4], "1"); // P1 finished
        assert_eq!(&summaries[4][4], "2");

        let (headers, history) = read_all(dir.path().join("history.csv"));
        assert_eq!(headers, ["tick", "P1", "P2"]);
        assert_eq!(history.len(), 5);
    }
}
