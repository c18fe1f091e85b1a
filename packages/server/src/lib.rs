// Giornalino Scolastico - Editorial Core
//
// This crate provides the editorial-workflow and notification engine for the
// school newspaper: the article state machine, the role-based permission
// model gating every transition, and the event-driven notification fan-out
// triggered by state changes, comments, assignments and chat.
//
// Storage, realtime transport and device delivery are external collaborators
// behind trait seams in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
