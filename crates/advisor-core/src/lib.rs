//! advisor-core - Core types and contracts for the CFD convergence advisor
//!
//! This crate provides everything that does not touch the network:
//! - `setup` - the simulation setup record and its validation rules
//! - `assessment` - the structured assessment returned by the service
//! - `reynolds` - Reynolds number derivation from raw form inputs
//! - `prompt` - deterministic prompt assembly
//! - `session` - the one-submission-at-a-time state machine
//! - `config` - file/environment configuration

pub mod assessment;
pub mod config;
pub mod prompt;
pub mod reynolds;
pub mod session;
pub mod setup;

// Re-export commonly used types
pub use assessment::{Assessment, Likelihood, OverallLikelihood};
pub use config::Config;
pub use prompt::{build_prompt, NOT_SPECIFIED};
pub use reynolds::{reynolds_text, NOT_CALCULATED};
pub use session::{AdvisorSession, SessionError, SessionState};
pub use setup::{SetupError, SetupField, SimulationSetup, TurbulenceModel};
