//! Riftbalance engine library.
//!
//! Exposes the roster data model, partition enumerator, role resolver,
//! scoring, selection, and protocol modules for use by integration
//! tests and the binary entry point.

pub mod assign;
pub mod engine;
pub mod partition;
pub mod protocol;
pub mod roster;
pub mod score;
pub mod select;
