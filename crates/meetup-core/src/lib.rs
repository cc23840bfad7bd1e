//! # meetup-core
//!
//! The deterministic Meetup Transition Engine - THE LOGIC.
//!
//! Agents carry a health [`Status`]. In each round the active agents
//! (CURE, SICK, DYING) meet in adjacent pairs and their statuses change
//! according to a fixed encounter table; HEALTHY and DEAD agents sit out.
//!
//! ```
//! use meetup_core::{Agent, Status, meet};
//!
//! let roster = vec![Agent::new("A", Status::Cure), Agent::new("B", Status::Sick)];
//! let next = meet(&roster);
//! assert_eq!(next[1].status, Status::Healthy);
//! ```
//!
//! The crate also ships the [`morse`] text encoder.
//!
//! ## Architectural Constraints
//!
//! - Pure: no I/O, no logging, no async
//! - Closed: the transition rules are compiled in
//! - Every operation on a roster returns a new roster; inputs are never mutated

// =============================================================================
// MODULES
// =============================================================================

pub mod engine;
pub mod formats;
pub mod morse;
pub mod primitives;
pub mod roster;
pub mod transition;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{Agent, MeetupError, Status};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use engine::{Meeting, Partition, meet, pairings, partition};
pub use roster::{Roster, RosterSummary};
pub use transition::{Transition, encounter, transition_table};

// =============================================================================
// RE-EXPORTS: Formats
// =============================================================================

pub use formats::{parse_roster, render_roster};
