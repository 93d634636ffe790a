//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod commands;
pub mod context;
pub mod contracts;
pub mod messenger;
pub mod reply_simulator;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
