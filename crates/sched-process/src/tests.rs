//! Unit tests for sched-process.

use sched_core::{ProcessId, ProcessRng, ProcessState, SequentialIds};
use sched_plan::parse_plan;

use crate::{random_walk, Lookahead, Process, ProcessFactory, Transition};

use ProcessState::{Executing as E, Finished as F, Pending as P, Ready as R};

fn planned(id: &str, dsl: &str) -> Process {
    Process::new(id, Transition::Planned(parse_plan(dsl)))
}

// ── Process ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod process {
    use super::*;

    #[test]
    fn new_process_is_ready_and_empty() {
        let p = Process::new("0001", Transition::RandomWalk);
        assert_eq!(p.state(), R);
        assert!(p.history().is_empty());
        assert_eq!(p.priority, 0);
    }

    #[test]
    fn advance_appends_exactly_once() {
        let p = planned("A", "2E").advance(E).advance(E).advance(F);
        assert_eq!(p.history(), &[E, E, F]);
        assert_eq!(p.state(), F);
        assert_eq!(p.ticks(), 3);
        assert!(p.is_finished());
    }

    #[test]
    fn hold_re_emits_current_state() {
        let p = planned("A", "E").advance(P).hold().hold();
        assert_eq!(p.history(), &[P, P, P]);
        assert_eq!(p.state(), P);
    }

    #[test]
    fn resume_takes_last_entry() {
        let p = Process::resume("A", Transition::RandomWalk, vec![R, E, E]);
        assert_eq!(p.state(), E);
        assert_eq!(p.trailing_run(E), 2);
        assert_eq!(p.trailing_run(R), 0);

        let empty = Process::resume("B", Transition::RandomWalk, vec![]);
        assert_eq!(empty.state(), R);
    }

    #[test]
    fn priority_clamped() {
        assert_eq!(planned("A", "E").with_priority(250).priority, 100);
        assert_eq!(planned("A", "E").with_priority(66).priority, 66);
    }

    #[test]
    fn processes_are_comparable_data() {
        let a = planned("A", "3E");
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a.clone().advance(E), b);
    }
}

// ── Transition ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod transition {
    use super::*;

    fn rng() -> ProcessRng {
        ProcessRng::new(3, &ProcessId::from("rw"))
    }

    #[test]
    fn ready_always_executes() {
        let mut rng = rng();
        for _ in 0..50 {
            assert_eq!(random_walk(R, &[], &mut rng), E);
        }
    }

    #[test]
    fn finished_is_absorbing() {
        let mut rng = rng();
        assert_eq!(random_walk(F, &[E], &mut rng), F);
        // A finished entry anywhere in the history wins over the state.
        assert_eq!(random_walk(E, &[E, F, R], &mut rng), F);
    }

    #[test]
    fn pending_never_finishes() {
        let mut rng = rng();
        for _ in 0..500 {
            let next = random_walk(P, &[P], &mut rng);
            assert!(next == P || next == E, "pending drew {next}");
        }
    }

    #[test]
    fn executing_reaches_every_successor() {
        let mut rng = rng();
        let drawn: Vec<ProcessState> = (0..500).map(|_| random_walk(E, &[E], &mut rng)).collect();
        assert!(drawn.contains(&P));
        assert!(drawn.contains(&E));
        assert!(drawn.contains(&F));
        assert!(!drawn.contains(&R));
    }

    #[test]
    fn planned_dispatch_ignores_rng() {
        let t = Transition::Planned(parse_plan("2E"));
        assert!(t.is_deterministic());
        let mut rng = rng();
        assert_eq!(t.propose(R, &[], &mut rng), E);
        assert_eq!(t.propose(E, &[E, E], &mut rng), F);
        assert!(!Transition::RandomWalk.is_deterministic());
    }
}

// ── Lookahead ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookahead {
    use super::*;

    #[test]
    fn repeated_calls_within_tick_agree() {
        let mut look = Lookahead::new(11);
        let p = Process::resume("0001", Transition::RandomWalk, vec![E]);
        let first = look.next_state(&p);
        for _ in 0..20 {
            assert_eq!(look.next_state(&p), first);
        }
        assert_eq!(look.cache().misses(), 1);
        assert_eq!(look.cache().hits(), 20);
    }

    #[test]
    fn distinct_history_is_a_distinct_draw() {
        let mut look = Lookahead::new(11);
        let a = Process::resume("0001", Transition::RandomWalk, vec![E]);
        let b = Process::resume("0001", Transition::RandomWalk, vec![P, E]);
        look.next_state(&a);
        look.next_state(&b);
        assert_eq!(look.cache().misses(), 2);
        assert_eq!(look.cache().len(), 2);
    }

    #[test]
    fn begin_tick_clears_entries_but_keeps_counters() {
        let mut look = Lookahead::new(11);
        let p = Process::resume("0001", Transition::RandomWalk, vec![P]);
        look.next_state(&p);
        look.next_state(&p);
        look.begin_tick();
        assert!(look.cache().is_empty());
        assert_eq!(look.cache().hits(), 1);
    }

    #[test]
    fn same_seed_same_draws() {
        let procs: Vec<Process> = (0..8)
            .map(|i| Process::resume(format!("{i:04}"), Transition::RandomWalk, vec![E]))
            .collect();
        let mut a = Lookahead::new(5);
        let mut b = Lookahead::new(5);
        // Visit in opposite orders: per-process RNGs make order irrelevant.
        let forward: Vec<ProcessState> = procs.iter().map(|p| a.next_state(p)).collect();
        let mut backward: Vec<ProcessState> = procs.iter().rev().map(|p| b.next_state(p)).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn planned_processes_bypass_cache() {
        let mut look = Lookahead::new(0);
        let p = planned("A", "3E 2P E");
        assert_eq!(look.next_state(&p), E);
        assert_eq!(look.next_state(&p), E);
        assert!(look.cache().is_empty());
        assert_eq!(look.cache().misses(), 0);
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod factory {
    use super::*;

    #[test]
    fn ids_come_from_generator() {
        let mut f = ProcessFactory::new(SequentialIds::new());
        let a = f.planned_str("E");
        let batch = f.random_batch(2);
        assert_eq!(a.id.as_str(), "0001");
        assert_eq!(batch[0].id.as_str(), "0002");
        assert_eq!(batch[1].id.as_str(), "0003");
        assert_eq!(batch[1].transition, Transition::RandomWalk);
    }

    #[test]
    fn independent_factories_do_not_share_counters() {
        let mut f1 = ProcessFactory::default();
        let mut f2 = ProcessFactory::default();
        assert_eq!(f1.random_walk().id, f2.random_walk().id);
    }

    #[test]
    fn planned_str_parses() {
        let mut f = ProcessFactory::default();
        let p = f.planned_str("2E,P");
        assert_eq!(p.transition, Transition::Planned(parse_plan("2E P")));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_processes_csv, load_processes_reader, ProcessError};

    #[test]
    fn loads_rows_in_order() {
        let csv = "id,priority,plan\nA,90,3E\nB,10,2E P 2E\n,50,Random\n";
        let mut f = ProcessFactory::default();
        let procs = load_processes_reader(Cursor::new(csv), &mut f).unwrap();
        assert_eq!(procs.len(), 3);
        assert_eq!(procs[0].id.as_str(), "A");
        assert_eq!(procs[0].priority, 90);
        assert_eq!(procs[1].transition, Transition::Planned(parse_plan("2E,P,2E")));
        assert_eq!(procs[2].id.as_str(), "0001");
        assert_eq!(procs[2].transition, Transition::RandomWalk);
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processes.csv");
        std::fs::write(&path, "id,priority,plan\n B , 70 , 2E P \n,5,random\n").unwrap();

        let procs = load_processes_csv(&path, &mut ProcessFactory::default()).unwrap();
        assert_eq!(procs.len(), 2);
        assert_eq!(procs[0].id.as_str(), "B");
        assert_eq!(procs[0].priority, 70);
        assert_eq!(procs[0].transition, Transition::Planned(parse_plan("2E P")));
        assert_eq!(procs[1].id.as_str(), "0001");
        assert_eq!(procs[1].priority, 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_processes_csv(&dir.path().join("absent.csv"), &mut ProcessFactory::default())
            .unwrap_err();
        assert!(matches!(err, ProcessError::Io(_)));
    }

    #[test]
    fn out_of_range_priority_rejected() {
        let csv = "id,priority,plan\nA,101,E\n";
        let err = load_processes_reader(Cursor::new(csv), &mut ProcessFactory::default()).unwrap_err();
        assert!(matches!(err, ProcessError::Parse(_)));
    }

    #[test]
    fn malformed_row_rejected() {
        let csv = "id,priority,plan\nA,high,E\n";
        let err = load_processes_reader(Cursor::new(csv), &mut ProcessFactory::default()).unwrap_err();
        assert!(matches!(err, ProcessError::Parse(_)));
    }

    #[test]
    fn unparseable_plan_becomes_empty_plan() {
        let csv = "id,priority,plan\nA,0,zzz\n";
        let procs = load_processes_reader(Cursor::new(csv), &mut ProcessFactory::default()).unwrap();
        assert_eq!(procs[0].transition, Transition::Planned(sched_plan::Plan::empty()));
    }
}
