//! # Innate Primitives
//!
//! Hardcoded constants for the meetup engine.
//!
//! The transition rules are fixed; only these input limits bound what the
//! boundary layers will accept.

/// Number of agents that take part in a single meeting.
///
/// Meetings are strictly pairwise; an odd active agent out sits the round out.
pub const MEETING_SIZE: usize = 2;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length for agent names, in bytes.
pub const MAX_NAME_LENGTH: usize = 256;

/// Maximum number of agents in a single roster.
///
/// Rosters longer than this are rejected by `Roster::validate`.
pub const MAX_ROSTER_LENGTH: usize = 10_000;
