//! `sched-process`: the simulated process and how it decides what to do next.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`process`]    | `Process`, `ProcessMap`                                 |
//! | [`transition`] | `Transition` (`RandomWalk` / `Planned`), `random_walk`  |
//! | [`lookahead`]  | `Lookahead` (per-process RNGs + per-tick `DrawCache`)   |
//! | [`factory`]    | `ProcessFactory`                                        |
//! | [`loader`]     | `load_processes_csv`, `load_processes_reader`           |
//! | [`error`]      | `ProcessError`, `ProcessResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Process` and `Transition`. |
//! | `fx-hash` | Uses `FxHashMap` for the per-tick draw cache.            |
//!
//! # Lookahead contract
//!
//! Schedulers ask "what would this process do next?" more than once per
//! tick: first to decide queue admission, then to commit the transition.
//! For random-walk processes both answers must be the same draw, so every
//! such question goes through [`Lookahead::next_state`], which memoises the
//! draw on `(id, state, history)` until the driver calls
//! [`Lookahead::begin_tick`].

pub mod error;
pub mod factory;
pub mod loader;
pub mod lookahead;
pub mod process;
pub mod transition;

#[cfg(test)]
mod tests;

pub use error::{ProcessError, ProcessResult};
pub use factory::ProcessFactory;
pub use loader::{load_processes_csv, load_processes_reader};
pub use lookahead::{DrawCache, Lookahead};
pub use process::{Process, ProcessMap};
pub use transition::{random_walk, Transition};
