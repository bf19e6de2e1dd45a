//! Process identifiers and the generators that mint them.
//!
//! A `ProcessId` is an opaque string.  Ordering is lexicographic and is the
//! sole tie-break key wherever the schedulers must pick between otherwise
//! equal candidates, so generators that want "creation order" to match
//! "id order" should emit fixed-width tokens (see [`SequentialIds`]).
//!
//! Generators are plain values owned by whoever builds processes; there is
//! no process-wide counter.

use std::collections::HashSet;
use std::fmt;

use crate::SimRng;

// ── ProcessId ─────────────────────────────────────────────────────────────────

/// Unique, stable identifier of a simulated process.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProcessId(String);

impl ProcessId {
    pub fn new(id: impl Into<String>) -> Self {
        ProcessId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProcessId {
    fn from(s: &str) -> Self {
        ProcessId(s.to_owned())
    }
}

impl From<String> for ProcessId {
    fn from(s: String) -> Self {
        ProcessId(s)
    }
}

impl AsRef<str> for ProcessId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── IdGenerator ───────────────────────────────────────────────────────────────

/// A source of fresh process ids.
///
/// Implementations must never return the same id twice; the schedulers rely
/// on uniqueness but do not check it.
pub trait IdGenerator {
    fn next_id(&mut self) -> ProcessId;
}

/// Counter-based ids, zero-padded: `"0001"`, `"0002"`, …
///
/// Padding keeps lexicographic order equal to creation order until the
/// counter outgrows `width` digits.
#[derive(Clone, Debug)]
pub struct SequentialIds {
    next:  u64,
    width: usize,
}

impl SequentialIds {
    /// Start at 1 with a width of 4 digits.
    pub fn new() -> Self {
        Self::with_width(4)
    }

    pub fn with_width(width: usize) -> Self {
        Self { next: 1, width }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ProcessId {
        let id = format!("{:0width$}", self.next, width = self.width);
        self.next += 1;
        ProcessId(id)
    }
}

/// Random alphanumeric tokens drawn from a seeded [`SimRng`].
///
/// Tokens already handed out are remembered so a collision is redrawn
/// rather than returned.  At most `62^len` distinct ids exist; asking for
/// more never returns.
pub struct RandomIds {
    rng:    SimRng,
    len:    usize,
    issued: HashSet<String>,
}

const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

impl RandomIds {
    /// `len` is clamped to at least 1.
    pub fn new(seed: u64, len: usize) -> Self {
        Self {
            rng:    SimRng::new(seed),
            len:    len.max(1),
            issued: HashSet::new(),
        }
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> ProcessId {
        loop {
            let token: String = (0..self.len)
                .map(|_| TOKEN_ALPHABET[self.rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
                .collect();
            if self.issued.insert(token.clone()) {
                return ProcessId(token);
            }
        }
    }
}
