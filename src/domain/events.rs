#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    Command(ShellCommand),
}

/// A user command as typed into the shell.
///
/// Message numbers are 1-based positions in the displayed (pinned-first)
/// order of the open conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    ListContacts,
    AddContact,
    /// Position in the contact list or a raw contact id.
    Open(String),
    Back,
    Menu(usize),
    Edit(usize),
    Delete(usize),
    Pin(usize),
    CancelEdit,
    /// Drops the pending auto-replies of the open conversation.
    CancelReplies,
    Help,
    /// Free text: sent as a message, or saved as the edit when one is active.
    Text(String),
    Invalid(String),
}
