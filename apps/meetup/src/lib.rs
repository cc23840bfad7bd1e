//! # Meetup App Library
//!
//! The command layer of the `meetup` binary, exposed so integration tests
//! can drive it without spawning a process.

pub mod cli;
pub mod config;
