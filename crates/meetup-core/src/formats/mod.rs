//! # Formats Module
//!
//! Text serialization for rosters. File I/O lives in the app layer.

mod roster_text;

pub use roster_text::*;
