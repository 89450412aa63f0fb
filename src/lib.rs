//! Contest Moves — data preparation for contest mini-games.
//!
//! Parses flavor-text move listings into an insertion-ordered
//! name→description table, matches descriptions against an output rule
//! set, and emits pipe-delimited effect records for game import.

pub mod core;
pub mod schema;
