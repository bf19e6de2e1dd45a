//! Seeded RNG wrappers: one stream per process, one for global draws.
//!
//! # Seeding
//!
//! A process's stream is seeded from the run seed and its id:
//!
//!   seed = global_seed XOR (fnv1a(process_id) * MIXING_CONSTANT)
//!
//! FNV-1a is stable across platforms and toolchains, which `DefaultHasher`
//! is not, so one seed replays one set of random walks everywhere.  Streams
//! are independent: visiting processes in a different order, or adding a
//! process, leaves every other process's draws unchanged.

use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ProcessId;

/// Fractional part of the golden ratio, 64 bits.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME:  u64 = 0x0000_0100_0000_01b3;

/// FNV-1a hash of a process id.
pub fn id_hash(id: &ProcessId) -> u64 {
    id.as_str()
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
}

// ── ProcessRng ────────────────────────────────────────────────────────────────

/// One process's random stream.
///
/// Schedulers never hold one of these: `sched-process` keeps them behind
/// its per-tick draw cache, so a second question about the same process in
/// the same tick gets the first answer instead of a fresh draw.
pub struct ProcessRng(SmallRng);

impl ProcessRng {
    pub fn new(global_seed: u64, id: &ProcessId) -> Self {
        let seed = global_seed ^ id_hash(id).wrapping_mul(MIXING_CONSTANT);
        ProcessRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }

    /// Uniform pick from `slice`; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Stream for draws that belong to no single process, such as random id
/// tokens.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.0.gen_range(range)
    }
}
