use std::io::{self, Write};

use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::view;

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        reply_delay_ms = context.config.replies.delay_ms,
        width = context.config.shell.width,
        "starting chat shell"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out, context.config.shell.width, event_source, orchestrator)
}

/// Redraws whenever the shell state revision moves, then waits for the next event.
fn run(
    out: &mut dyn Write,
    width: usize,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    let mut drawn_revision = None;

    while orchestrator.state().is_running() {
        let revision = orchestrator.state().revision();
        if drawn_revision != Some(revision) {
            writeln!(out)?;
            for line in view::render(orchestrator.state(), orchestrator.messenger(), width) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
            drawn_revision = Some(revision);
        }

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    tracing::info!("chat shell stopped");
    Ok(())
}
