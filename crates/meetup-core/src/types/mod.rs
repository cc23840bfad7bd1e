//! # Core Type Definitions
//!
//! This module contains the core types for the meetup engine:
//! - Health status of an agent (`Status`)
//! - The agent record itself (`Agent`)
//! - Error types (`MeetupError`)
//!
//! ## Value Semantics
//!
//! `Agent` is an immutable value. The engine never mutates an agent in place;
//! a transition produces a new `Agent` via [`Agent::with_status`].

use crate::primitives::MAX_NAME_LENGTH;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// STATUS
// =============================================================================

/// The health condition of an agent.
///
/// The variant order is also the canonical order used by the encounter table:
/// `Cure < Healthy < Sick < Dying < Dead`.
///
/// Serializes as the upper-case name. Deserializes through [`FromStr`], so
/// any ASCII case is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Carries a cure. Never altered by a meeting.
    Cure,
    /// Inert: never paired, never altered.
    Healthy,
    Sick,
    Dying,
    /// Inert: never paired, never altered.
    Dead,
}

impl Status {
    /// Every status, in canonical order.
    pub const ALL: [Status; 5] = [
        Status::Cure,
        Status::Healthy,
        Status::Sick,
        Status::Dying,
        Status::Dead,
    ];

    /// The statuses that take part in meetings.
    pub const ACTIVE: [Status; 3] = [Status::Cure, Status::Sick, Status::Dying];

    /// Upper-case name, as used in the text roster format.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Status::Cure => "CURE",
            Status::Healthy => "HEALTHY",
            Status::Sick => "SICK",
            Status::Dying => "DYING",
            Status::Dead => "DEAD",
        }
    }

    /// HEALTHY and DEAD agents sit out every meeting.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        matches!(self, Status::Healthy | Status::Dead)
    }

    /// Check if this status takes part in pairing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_inert()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = MeetupError;

    /// Parse a status name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MeetupError::UnknownStatus(trimmed.to_string()))
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// AGENT
// =============================================================================

/// A named participant with a health status.
///
/// Names are identifiers for display only; they are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    /// Display name of the agent.
    pub name: String,
    /// Current health status.
    pub status: Status,
}

impl Agent {
    /// Create a new agent.
    #[must_use]
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    /// Return a copy of this agent carrying a different status.
    #[must_use]
    pub fn with_status(&self, status: Status) -> Self {
        Self {
            name: self.name.clone(),
            status,
        }
    }

    /// Validate an agent at the input boundary.
    ///
    /// An agent is valid if its name is non-blank and within
    /// `MAX_NAME_LENGTH` bytes.
    pub fn validate(&self) -> Result<(), MeetupError> {
        if self.name.trim().is_empty() {
            return Err(MeetupError::InvalidAgent("name must not be empty".into()));
        }

        if self.name.len() > MAX_NAME_LENGTH {
            return Err(MeetupError::InvalidAgent(format!(
                "name is {} bytes, maximum is {}",
                self.name.len(),
                MAX_NAME_LENGTH
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.status)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around the meetup engine.
///
/// The engine itself is total and never fails; these errors all come from
/// the input and output boundaries (parsing, validation, files, config).
#[derive(Debug, Error)]
pub enum MeetupError {
    /// A status name outside the five known conditions.
    #[error("Unknown status: {0:?} (expected CURE, HEALTHY, SICK, DYING or DEAD)")]
    UnknownStatus(String),

    /// An agent failed validation.
    #[error("Invalid agent: {0}")]
    InvalidAgent(String),

    /// The roster exceeds the maximum accepted size.
    #[error("Roster has {len} agents, maximum is {max}")]
    RosterTooLarge { len: usize, max: usize },

    /// A line of a text roster could not be parsed.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The configuration file is invalid.
    #[error("Config error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!("sick".parse::<Status>().expect("parse"), Status::Sick);
        assert_eq!(" Dying ".parse::<Status>().expect("parse"), Status::Dying);
        assert_eq!("CURE".parse::<Status>().expect("parse"), Status::Cure);
    }

    #[test]
    fn status_parse_rejects_unknown() {
        let result = "ZOMBIE".parse::<Status>();
        assert!(matches!(result, Err(MeetupError::UnknownStatus(s)) if s == "ZOMBIE"));
    }

    #[test]
    fn status_display_roundtrips() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().expect("parse"), status);
        }
    }

    #[test]
    fn inert_statuses() {
        assert!(Status::Healthy.is_inert());
        assert!(Status::Dead.is_inert());
        for status in Status::ACTIVE {
            assert!(status.is_active());
        }
    }

    #[test]
    fn with_status_keeps_name_and_original() {
        let agent = Agent::new("Ada", Status::Sick);
        let healed = agent.with_status(Status::Healthy);

        assert_eq!(healed.name, "Ada");
        assert_eq!(healed.status, Status::Healthy);
        assert_eq!(agent.status, Status::Sick);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let agent = Agent::new("   ", Status::Cure);
        assert!(matches!(agent.validate(), Err(MeetupError::InvalidAgent(_))));
    }

    #[test]
    fn validate_rejects_long_name() {
        let agent = Agent::new("x".repeat(MAX_NAME_LENGTH + 1), Status::Cure);
        assert!(matches!(agent.validate(), Err(MeetupError::InvalidAgent(_))));
    }

    #[test]
    fn status_serde_uses_upper_case_and_accepts_lower_case() {
        let json = serde_json::to_string(&Agent::new("Bo", Status::Dying)).expect("serialize");
        assert_eq!(json, r#"{"name":"Bo","status":"DYING"}"#);

        let agent: Agent =
            serde_json::from_str(r#"{"name":"Bo","status":"dead"}"#).expect("deserialize");
        assert_eq!(agent.status, Status::Dead);
    }

    #[test]
    fn status_serde_matches_from_str_for_mixed_case() {
        let agent: Agent =
            serde_json::from_str(r#"{"name":"Bo","status":"sIcK"}"#).expect("deserialize");
        assert_eq!(agent.status, Status::Sick);
        assert_eq!(agent.status, "sIcK".parse::<Status>().expect("parse"));
    }

    #[test]
    fn status_serde_rejects_unknown() {
        let result = serde_json::from_str::<Agent>(r#"{"name":"Bo","status":"ZOMBIE"}"#);
        let message = result.expect_err("unknown status").to_string();
        assert!(message.contains("Unknown status"), "{message}");
    }
}
