//! Unit tests for sched-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::HashSet;

    use crate::{IdGenerator, ProcessId, RandomIds, SequentialIds};

    #[test]
    fn ordering_is_lexicographic() {
        assert!(ProcessId::from("0001") < ProcessId::from("0002"));
        assert!(ProcessId::from("A") < ProcessId::from("B"));
        // Not numeric: "10" sorts before "9".
        assert!(ProcessId::from("10") < ProcessId::from("9"));
    }

    #[test]
    fn display_is_raw_string() {
        assert_eq!(ProcessId::new("P1").to_string(), "P1");
    }

    #[test]
    fn sequential_ids_are_padded() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id().as_str(), "0001");
        assert_eq!(ids.next_id().as_str(), "0002");

        let mut wide = SequentialIds::with_width(6);
        assert_eq!(wide.next_id().as_str(), "000001");
    }

    #[test]
    fn sequential_ids_sort_in_creation_order() {
        let mut ids = SequentialIds::new();
        let minted: Vec<ProcessId> = (0..20).map(|_| ids.next_id()).collect();
        let mut sorted = minted.clone();
        sorted.sort();
        assert_eq!(minted, sorted);
    }

    #[test]
    fn random_ids_unique_and_sized() {
        let mut ids = RandomIds::new(7, 6);
        let minted: Vec<ProcessId> = (0..200).map(|_| ids.next_id()).collect();
        assert!(minted.iter().all(|id| id.as_str().len() == 6));
        let unique: HashSet<_> = minted.iter().collect();
        assert_eq!(unique.len(), minted.len());
    }

    #[test]
    fn random_ids_reproducible_from_seed() {
        let mut a = RandomIds::new(99, 8);
        let mut b = RandomIds::new(99, 8);
        for _ in 0..10 {
            assert_eq!(a.next_id(), b.next_id());
        }
    }
}

#[cfg(test)]
mod state {
    use crate::ProcessState;

    #[test]
    fn display_lowercase() {
        assert_eq!(ProcessState::Ready.to_string(), "ready");
        assert_eq!(ProcessState::Pending.to_string(), "pending");
        assert_eq!(ProcessState::Executing.to_string(), "executing");
        assert_eq!(ProcessState::Finished.to_string(), "finished");
    }

    #[test]
    fn default_is_ready() {
        assert_eq!(ProcessState::default(), ProcessState::Ready);
    }

    #[test]
    fn predicates() {
        assert!(ProcessState::Finished.is_finished());
        assert!(!ProcessState::Executing.is_finished());
        assert!(ProcessState::Executing.is_executing());
    }
}

#[cfg(test)]
mod time {
    use crate::{SchedError, SimConfig, Tick};

    #[test]
    fn next_and_display() {
        assert_eq!(Tick(10).next(), Tick(11));
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn history_index_is_zero_based() {
        assert_eq!(Tick::ZERO.history_index(), None);
        assert_eq!(Tick(1).history_index(), Some(0));
        assert_eq!(Tick(5).history_index(), Some(4));
    }

    #[test]
    fn config_end_tick() {
        assert_eq!(SimConfig::new(50, 1).end_tick(), Tick(50));
    }

    #[test]
    fn zero_ticks_rejected() {
        let err = SimConfig::new(0, 1).validate().unwrap_err();
        assert!(matches!(err, SchedError::Config(_)));
        assert!(SimConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::rng::id_hash;
    use crate::{ProcessId, ProcessRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let id = ProcessId::from("0001");
        let mut r1 = ProcessRng::new(12345, &id);
        let mut r2 = ProcessRng::new(12345, &id);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1000);
            let b: u32 = r2.gen_range(0..1000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_processes_differ() {
        let mut r0 = ProcessRng::new(1, &ProcessId::from("0001"));
        let mut r1 = ProcessRng::new(1, &ProcessId::from("0002"));
        let a: Vec<u64> = (0..4).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..4).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent ids should diverge");
    }

    #[test]
    fn id_hash_is_stable() {
        // FNV-1a of the empty string is the offset basis.
        assert_eq!(id_hash(&ProcessId::from("")), 0xcbf2_9ce4_8422_2325);
        assert_eq!(id_hash(&ProcessId::from("a")), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = ProcessRng::new(0, &ProcessId::from("x"));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }

    #[test]
    fn sim_rng_replays_from_seed() {
        let mut a = SimRng::new(3);
        let mut b = SimRng::new(3);
        let xs: Vec<u8> = (0..16).map(|_| a.gen_range(0..62)).collect();
        let ys: Vec<u8> = (0..16).map(|_| b.gen_range(0..62)).collect();
        assert_eq!(xs, ys);
    }
}
