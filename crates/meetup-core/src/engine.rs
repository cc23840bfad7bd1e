//! # Meetup Transition Engine
//!
//! One round of meetings over a roster:
//!
//! 1. Partition into active (CURE, SICK, DYING) and inert (HEALTHY, DEAD)
//!    agents, keeping relative order in both.
//! 2. Pair the active agents in order: `(0, 1), (2, 3), ...`. With an odd
//!    count the last active agent meets nobody.
//! 3. Apply [`encounter`] to each pair.
//! 4. Emit the processed pairs, then the inert agents.
//!
//! Inert agents always end up after every active agent, whatever their
//! original position.

use crate::Agent;
use crate::primitives::MEETING_SIZE;
use crate::transition::encounter;

/// A roster split by whether agents take part in meetings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    /// CURE, SICK and DYING agents, in roster order.
    pub active: Vec<&'a Agent>,
    /// HEALTHY and DEAD agents, in roster order.
    pub inert: Vec<&'a Agent>,
}

/// A single meeting slot within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meeting<'a> {
    /// Two adjacent active agents meet.
    Pair(&'a Agent, &'a Agent),
    /// The trailing active agent of an odd-sized group.
    Alone(&'a Agent),
}

impl Meeting<'_> {
    /// Resolve the meeting into its resulting agents.
    #[must_use]
    pub fn resolve(&self) -> Vec<Agent> {
        match *self {
            Meeting::Pair(a, b) => {
                let (a_after, b_after) = encounter(a.status, b.status);
                vec![a.with_status(a_after), b.with_status(b_after)]
            }
            Meeting::Alone(agent) => vec![agent.clone()],
        }
    }
}

/// Split a roster into active and inert agents.
#[must_use]
pub fn partition(roster: &[Agent]) -> Partition<'_> {
    let (inert, active): (Vec<&Agent>, Vec<&Agent>) =
        roster.iter().partition(|agent| agent.status.is_inert());
    Partition { active, inert }
}

/// Pair up active agents in order, yielding a trailing `Alone` if the count is odd.
pub fn pairings<'a>(active: &[&'a Agent]) -> impl Iterator<Item = Meeting<'a>> {
    let pairs = active.chunks_exact(MEETING_SIZE);
    let leftover = pairs.remainder().first().copied();

    pairs
        .map(|pair| Meeting::Pair(pair[0], pair[1]))
        .chain(leftover.map(Meeting::Alone))
}

/// Run one round of meetings over `roster`.
///
/// Pure: the input is left untouched and the output has the same length.
#[must_use]
pub fn meet(roster: &[Agent]) -> Vec<Agent> {
    let Partition { active, inert } = partition(roster);

    let mut next = Vec::with_capacity(roster.len());
    for meeting in pairings(&active) {
        next.extend(meeting.resolve());
    }
    next.extend(inert.into_iter().cloned());

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn empty_roster() {
        assert!(meet(&[]).is_empty());
    }

    #[test]
    fn partition_keeps_order() {
        let roster = vec![
            Agent::new("a", Status::Dead),
            Agent::new("b", Status::Sick),
            Agent::new("c", Status::Healthy),
            Agent::new("d", Status::Cure),
        ];
        let split = partition(&roster);

        let active: Vec<_> = split.active.iter().map(|a| a.name.as_str()).collect();
        let inert: Vec<_> = split.inert.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(active, vec!["b", "d"]);
        assert_eq!(inert, vec!["a", "c"]);
    }

    #[test]
    fn pairings_with_odd_count() {
        let roster = vec![
            Agent::new("a", Status::Sick),
            Agent::new("b", Status::Sick),
            Agent::new("c", Status::Cure),
        ];
        let active: Vec<&Agent> = roster.iter().collect();
        let meetings: Vec<_> = pairings(&active).collect();

        assert_eq!(
            meetings,
            vec![
                Meeting::Pair(&roster[0], &roster[1]),
                Meeting::Alone(&roster[2])
            ]
        );
    }

    #[test]
    fn single_active_agent_is_alone() {
        let roster = vec![Agent::new("solo", Status::Dying)];
        assert_eq!(meet(&roster), roster);
    }

    #[test]
    fn inert_agents_move_to_the_end() {
        let roster = vec![
            Agent::new("h", Status::Healthy),
            Agent::new("s1", Status::Sick),
            Agent::new("x", Status::Dead),
            Agent::new("s2", Status::Sick),
        ];
        let next = meet(&roster);

        assert_eq!(
            next,
            vec![
                Agent::new("s1", Status::Dying),
                Agent::new("s2", Status::Dying),
                Agent::new("h", Status::Healthy),
                Agent::new("x", Status::Dead),
            ]
        );
    }
}
