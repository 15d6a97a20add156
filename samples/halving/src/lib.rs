//! Halving Sample Application
//!
//! Threads an integer through a partial "halve" step with the `|` chain
//! operator of [`monadic::control::Maybe`]. Halving zero has no result, so a
//! chain that reaches zero becomes `Absent` and every later step is skipped.
//!
//! # Modules
//!
//! - [`config`]: Configuration loaded from the environment
//! - [`scenario`]: The halving step and the two checked scenarios

pub mod config;
pub mod scenario;

pub use config::{ConfigError, HalvingConfig};
pub use scenario::{ScenarioError, ScenarioReport, half, halve_repeatedly, run};
