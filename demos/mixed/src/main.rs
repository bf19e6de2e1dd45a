//! mixed: planned and random-walk processes under every scheduling policy.
//!
//! Loads seven processes from an embedded CSV (two fixed plans, five random
//! walks), runs them under FCFS, round-robin and the multi-level queue, and
//! for each policy prints the history table and exports it as CSV.
//!
//! Usage: `mixed [config.json]`.  Without a config file the defaults below
//! are used.  Set `RUST_LOG=debug` to see every tick.

use std::io::Cursor;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use sched_core::SimConfig;
use sched_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sched_policy::{Fcfs, Mlq, RoundRobin, SchedulingPolicy};
use sched_process::{Process, ProcessFactory, load_processes_reader};
use sched_sim::{HistoryTable, SimBuilder};

// ── Processes ─────────────────────────────────────────────────────────────────

// Empty ids are filled in by the factory's sequential generator.
const PROCESS_CSV: &str = "\
id,priority,plan\n\
,80,3E 2P E\n\
,40,4E P 4E\n\
,90,random\n\
,70,random\n\
,50,random\n\
,20,random\n\
,10,random\n\
";

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:        SimConfig,
    time_slice: usize,
    output_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:        SimConfig { max_ticks: 60, seed: 42 },
            time_slice: 2,
            output_dir: PathBuf::from("output/mixed"),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn print_table(table: &HistoryTable) {
    const WIDTH: usize = 10;

    print!("{:<6}", "tick");
    for id in table.ids() {
        print!("{:<WIDTH$}", id.as_str());
    }
    println!();
    println!("{}", "-".repeat(6 + WIDTH * table.ids().count()));

    for (tick, row) in table.rows() {
        print!("{:<6}", tick.0);
        for id in table.ids() {
            let cell = row.get(id).map(|s| s.as_str()).unwrap_or("");
            print!("{cell:<WIDTH$}");
        }
        println!();
    }
}

// ── Run one policy ────────────────────────────────────────────────────────────

fn run_policy<P: SchedulingPolicy>(
    policy:    P,
    processes: Vec<Process>,
    config:    &DemoConfig,
) -> Result<()> {
    let name = policy.name();
    let mut sim = SimBuilder::new(config.sim.clone(), policy)
        .processes(processes)
        .build()?;

    let dir = config.output_dir.join(name);
    std::fs::create_dir_all(&dir)?;
    let mut obs = SimOutputObserver::new(CsvWriter::new(&dir)?);

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    let table = sim.history_table();
    obs.writer_mut().write_history(&table)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("=== {name} ===");
    println!(
        "{} ticks in {:.3} ms, all finished: {}",
        table.len(),
        elapsed.as_secs_f64() * 1e3,
        sim.is_finished(),
    );
    println!();
    print_table(&table);
    println!();
    println!("  written to {}", dir.display());
    println!();
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    config.sim.validate()?;
    let time_slice = NonZeroUsize::new(config.time_slice)
        .context("time_slice must be > 0")?;

    let mut factory = ProcessFactory::default();
    let processes = load_processes_reader(Cursor::new(PROCESS_CSV), &mut factory)?;
    tracing::info!(
        processes  = processes.len(),
        max_ticks  = config.sim.max_ticks,
        seed       = config.sim.seed,
        time_slice = time_slice.get(),
        "loaded demo processes",
    );

    run_policy(Fcfs, processes.clone(), &config)?;
    run_policy(RoundRobin::new(time_slice), processes.clone(), &config)?;
    run_policy(Mlq::new(), processes, &config)?;

    Ok(())
}
