//! State transitions
//!
//! Each instruction mutates a `LeagueState` in place and touches no storage;
//! `LeagueManager` decides which slices to write afterwards.

pub mod backup;
pub mod fixture;
pub mod team;
