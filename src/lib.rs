//! termorch: natural-language objectives to safety-annotated shell command plans.
//!
//! An objective is framed into a fixed prompt, sent to a reasoning backend once,
//! and the reply is resolved into a validated [`plan::CommandPlan`] or a typed
//! [`error::OrchestratorError`]. Commands are never executed.

pub mod ai;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod plan;
pub mod server;
pub mod ui;

pub use error::{OrchestratorError, Result};
pub use orchestrator::Orchestrator;
pub use plan::{CommandPlan, CommandStep, Objective, SafetyLevel};
