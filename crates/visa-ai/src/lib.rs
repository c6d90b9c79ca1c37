//! Deterministic Express Entry assessment engine and supporting service plumbing.
//!
//! The scoring modules are pure functions over an in-memory profile record:
//! no I/O, no shared state, identical input always yields an identical
//! report. The surrounding config, telemetry, repository, and router modules
//! wire that engine into a deployable HTTP service.

pub mod config;
pub mod error;
pub mod reports;
pub mod telemetry;
