//! Shared helpers for the behaviour suites.
//!
//! Exposes `steps` wrappers that strip the quotes scenarios put around
//! catalog text, plus the named resources used by the loader scenarios.

pub mod resources;
pub mod steps;
