//! # Encounter Table
//!
//! The fixed rule for what happens when two active agents meet.
//!
//! | a | b | a' | b' |
//! |---|---|---|---|
//! | CURE | CURE | CURE | CURE |
//! | CURE | SICK | CURE | HEALTHY |
//! | CURE | DYING | CURE | SICK |
//! | SICK | SICK | DYING | DYING |
//! | SICK | DYING | DYING | DEAD |
//! | DYING | DYING | DEAD | DEAD |
//!
//! Only the rows with `a <= b` are written down. The mirrored rows are
//! derived by swapping roles, so `encounter(a, b)` and `encounter(b, a)`
//! always agree.

use crate::Status;
use serde::{Deserialize, Serialize};

/// One row of the encounter table, for a specific ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub first: Status,
    pub second: Status,
    pub first_after: Status,
    pub second_after: Status,
}

/// Outcome of a meeting with the pair already in canonical order (`a <= b`).
fn canonical_encounter(a: Status, b: Status) -> (Status, Status) {
    match (a, b) {
        (Status::Cure, Status::Cure) => (Status::Cure, Status::Cure),
        (Status::Cure, Status::Sick) => (Status::Cure, Status::Healthy),
        (Status::Cure, Status::Dying) => (Status::Cure, Status::Sick),
        (Status::Sick, Status::Sick) => (Status::Dying, Status::Dying),
        (Status::Sick, Status::Dying) => (Status::Dying, Status::Dead),
        (Status::Dying, Status::Dying) => (Status::Dead, Status::Dead),
        // HEALTHY and DEAD never meet anyone.
        (a, b) => (a, b),
    }
}

/// Compute the statuses of two agents after they meet.
///
/// Total over all statuses. Pairs involving HEALTHY or DEAD are never formed
/// by the engine and map to themselves.
#[must_use]
pub fn encounter(a: Status, b: Status) -> (Status, Status) {
    if a <= b {
        canonical_encounter(a, b)
    } else {
        let (b_after, a_after) = canonical_encounter(b, a);
        (a_after, b_after)
    }
}

/// The full table over every ordered pair of active statuses.
#[must_use]
pub fn transition_table() -> Vec<Transition> {
    Status::ACTIVE
        .iter()
        .flat_map(|&first| {
            Status::ACTIVE.iter().map(move |&second| {
                let (first_after, second_after) = encounter(first, second);
                Transition {
                    first,
                    second,
                    first_after,
                    second_after,
                }
            })
        })
        .collect()
}
