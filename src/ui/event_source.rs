use std::time::Duration;

use anyhow::{Context, Result};
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    runtime::Runtime,
    time::{Interval, MissedTickBehavior},
};

use crate::{
    domain::events::{AppEvent, ShellCommand},
    usecases::contracts::AppEventSource,
};

const COMMAND_PREFIX: char = '/';

/// Reads shell lines from stdin, yielding a `Tick` whenever the tick interval
/// elapses first. End of input is treated as a quit request.
pub struct StdinEventSource {
    runtime: Option<Runtime>,
    lines: Lines<BufReader<Stdin>>,
    ticker: Interval,
}

impl StdinEventSource {
    pub fn new(tick: Duration) -> Result<Self> {
        // Stdin is served by the blocking pool; only the timer driver is needed.
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .context("failed to build shell runtime")?;

        let (lines, ticker) = {
            let _entered = runtime.enter();
            let mut ticker = tokio::time::interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            (BufReader::new(tokio::io::stdin()).lines(), ticker)
        };

        Ok(Self {
            runtime: Some(runtime),
            lines,
            ticker,
        })
    }
}

impl AppEventSource for StdinEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        let runtime = self
            .runtime
            .as_ref()
            .context("shell runtime already shut down")?;

        runtime.block_on(next_line_or_tick(&mut self.lines, &mut self.ticker))
    }
}

impl Drop for StdinEventSource {
    fn drop(&mut self) {
        // A pending stdin read sits on a blocking thread; don't wait for it.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

async fn next_line_or_tick(
    lines: &mut Lines<BufReader<Stdin>>,
    ticker: &mut Interval,
) -> Result<Option<AppEvent>> {
    tokio::select! {
        line = lines.next_line() => {
            let line = line.context("failed to read from stdin")?;
            Ok(match line {
                Some(line) => parse_line(&line),
                None => Some(AppEvent::QuitRequested),
            })
        }
        _ = ticker.tick() => Ok(Some(AppEvent::Tick)),
    }
}

/// Maps one input line to an event. Blank lines produce nothing.
///
/// Lines starting with `/` are commands; `//` escapes a literal slash.
/// Anything else is message text, kept as typed.
pub fn parse_line(line: &str) -> Option<AppEvent> {
    if line.trim().is_empty() {
        return None;
    }

    let Some(command) = line.trim_start().strip_prefix(COMMAND_PREFIX) else {
        return Some(AppEvent::Command(ShellCommand::Text(line.to_owned())));
    };

    if command.starts_with(COMMAND_PREFIX) {
        return Some(AppEvent::Command(ShellCommand::Text(command.to_owned())));
    }

    let mut parts = command.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_ascii_lowercase();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    let command = match name.as_str() {
        "quit" | "exit" | "q" => return Some(AppEvent::QuitRequested),
        "contacts" | "ls" => ShellCommand::ListContacts,
        "add" => ShellCommand::AddContact,
        "open" if !arg.is_empty() => ShellCommand::Open(arg.to_owned()),
        "open" => ShellCommand::Invalid("usage: /open <n|id>".to_owned()),
        "back" => ShellCommand::Back,
        "menu" => position(arg, "menu", ShellCommand::Menu),
        "edit" => position(arg, "edit", ShellCommand::Edit),
        "delete" | "del" => position(arg, "delete", ShellCommand::Delete),
        "pin" | "unpin" => position(arg, "pin", ShellCommand::Pin),
        "cancel" => ShellCommand::CancelEdit,
        "hush" => ShellCommand::CancelReplies,
        "help" | "?" => ShellCommand::Help,
        other => ShellCommand::Invalid(format!("unknown command /{other}; try /help")),
    };

    Some(AppEvent::Command(command))
}

fn position(arg: &str, name: &str, build: fn(usize) -> ShellCommand) -> ShellCommand {
    match arg.parse::<usize>() {
        Ok(position) if position > 0 => build(position),
        _ => ShellCommand::Invalid(format!("usage: /{name} <n>")),
    }
}

/// Replays a fixed list of events, then asks the shell to quit.
#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(Some(self.queue.pop_front().unwrap_or(AppEvent::QuitRequested)))
    }
}
