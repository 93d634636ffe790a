use anyhow::Result;

use crate::{
    domain::{events::AppEvent, shell_state::ShellState},
    usecases::messenger::Messenger,
};

pub trait AppEventSource {
    /// Blocks until the next event. `None` means nothing actionable arrived.
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn messenger(&self) -> &Messenger;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
