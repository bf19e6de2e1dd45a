//! The plan DSL.
//!
//! # Grammar
//!
//! ```text
//! plan      = token { delimiter token }
//! delimiter = " " | "," | ";" | "|"
//! token     = [ digits ] ( "E" | "e" | "P" | "p" )
//! ```
//!
//! The digit prefix is the step duration and defaults to 1 when absent.
//! `E` is executing, `P` is pending.
//!
//! Malformed tokens (wrong suffix, non-digit prefix, a duration that does
//! not fit in `u32`) are dropped and parsing continues with the next token.
//! Each drop is reported as a `debug` tracing event and nothing else.
//!
//! ```
//! use sched_plan::{parse_plan, PlanStep};
//!
//! let plan = parse_plan("3E 2P E");
//! assert_eq!(
//!     plan.steps(),
//!     &[PlanStep::executing(3), PlanStep::pending(2), PlanStep::executing(1)],
//! );
//! ```

use crate::{Plan, PlanPhase, PlanStep};

const DELIMITERS: [char; 4] = [' ', ',', ';', '|'];

/// Parse a single DSL string into a [`Plan`].
pub fn parse_plan(input: &str) -> Plan {
    parse_plan_tokens([input])
}

/// Parse several DSL fragments, in order, into one [`Plan`].
///
/// Each fragment may itself hold several delimited tokens, so
/// `parse_plan_tokens(["3E", "2P", "E"])` and `parse_plan("3E,2P,E")` are
/// equivalent.
pub fn parse_plan_tokens<I, S>(fragments: I) -> Plan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut steps = Vec::new();
    for fragment in fragments {
        for token in fragment.as_ref().split(DELIMITERS) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match parse_step(token) {
                Some(step) => steps.push(step),
                None => tracing::debug!(token, "dropping malformed plan token"),
            }
        }
    }
    Plan::new(steps)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_step(token: &str) -> Option<PlanStep> {
    let suffix = token.chars().next_back()?;
    let phase = match suffix.to_ascii_lowercase() {
        'e' => PlanPhase::Executing,
        'p' => PlanPhase::Pending,
        _ => return None,
    };

    let prefix = &token[..token.len() - suffix.len_utf8()];
    let duration = if prefix.is_empty() {
        1
    } else if prefix.bytes().all(|b| b.is_ascii_digit()) {
        prefix.parse::<u32>().ok()?
    } else {
        return None;
    };

    Some(PlanStep { phase, duration })
}
