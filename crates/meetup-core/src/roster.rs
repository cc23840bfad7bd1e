//! # Roster
//!
//! The ordered collection of agents processed in one round, plus the
//! validation and summary helpers that sit around the engine.

use crate::engine::meet;
use crate::primitives::MAX_ROSTER_LENGTH;
use crate::{Agent, MeetupError, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered sequence of agents.
///
/// Serializes as a plain JSON array of agents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Agent>);

impl Roster {
    /// Create a roster from agents in pairing order.
    #[must_use]
    pub fn new(agents: Vec<Agent>) -> Self {
        Self(agents)
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.0
    }

    #[must_use]
    pub fn into_agents(self) -> Vec<Agent> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate every agent and the roster size.
    ///
    /// Returns `MeetupError::RosterTooLarge` past `MAX_ROSTER_LENGTH`, or the
    /// first agent validation error.
    pub fn validate(&self) -> Result<(), MeetupError> {
        if self.0.len() > MAX_ROSTER_LENGTH {
            return Err(MeetupError::RosterTooLarge {
                len: self.0.len(),
                max: MAX_ROSTER_LENGTH,
            });
        }

        self.0.iter().try_for_each(Agent::validate)
    }

    /// Run one round of meetings.
    #[must_use]
    pub fn meet(&self) -> Roster {
        Roster(meet(&self.0))
    }

    /// Run `rounds` consecutive rounds. Zero rounds returns an equal roster.
    #[must_use]
    pub fn advance(&self, rounds: usize) -> Roster {
        (0..rounds).fold(self.clone(), |roster, _| roster.meet())
    }
}

impl FromIterator<Agent> for Roster {
    fn from_iter<I: IntoIterator<Item = Agent>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// ROSTER SUMMARY
// =============================================================================

/// Per-status head count of a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    /// Total number of agents.
    pub total: usize,
    /// Count per status. Every status is present, zero if absent.
    pub by_status: BTreeMap<Status, usize>,
}

impl RosterSummary {
    #[must_use]
    pub fn from_agents(agents: &[Agent]) -> Self {
        let mut by_status: BTreeMap<Status, usize> =
            Status::ALL.into_iter().map(|status| (status, 0)).collect();

        for agent in agents {
            *by_status.entry(agent.status).or_insert(0) += 1;
        }

        Self {
            total: agents.len(),
            by_status,
        }
    }

    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self::from_agents(roster.agents())
    }

    /// Number of agents with the given status.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Number of agents that will take part in the next round.
    #[must_use]
    pub fn active(&self) -> usize {
        Status::ACTIVE.iter().map(|&status| self.count(status)).sum()
    }
}
