use anyhow::Result;

use crate::{
    domain::{
        contact::ContactId,
        events::{AppEvent, ShellCommand},
        message::MessageId,
        shell_state::ShellState,
    },
    usecases::{
        commands::{self, CommandError, SendMessageCommand},
        contracts::ShellOrchestrator,
        messenger::Messenger,
    },
};

pub const HELP_TEXT: &str = "/contacts /add /open <n> /back /menu <n> /edit <n> /delete <n> \
/pin <n> /cancel /hush /quit; other lines are sent, or saved while editing";

pub struct DefaultShellOrchestrator {
    state: ShellState,
    messenger: Messenger,
}

impl DefaultShellOrchestrator {
    pub fn new(messenger: Messenger) -> Self {
        Self {
            state: ShellState::default(),
            messenger,
        }
    }

    fn handle_command(&mut self, command: ShellCommand) {
        self.state.clear_notice();

        let outcome = match command {
            ShellCommand::ListContacts | ShellCommand::Back => {
                self.state.close();
                Ok(())
            }
            ShellCommand::AddContact => {
                let contact = self.messenger.add_contact();
                self.state.info(format!("added {}", contact.display_name));
                Ok(())
            }
            ShellCommand::Open(selector) => self.open(&selector),
            ShellCommand::Menu(position) => self.menu(position),
            ShellCommand::Edit(position) => self.begin_edit(position),
            ShellCommand::Delete(position) => self.delete(position),
            ShellCommand::Pin(position) => self.toggle_pin(position),
            ShellCommand::CancelEdit => {
                if self.messenger.cancel_edit() {
                    self.state.info("edit cancelled");
                } else {
                    self.state.info("nothing is being edited");
                }
                Ok(())
            }
            ShellCommand::CancelReplies => self.cancel_replies(),
            ShellCommand::Help => {
                self.state.info(HELP_TEXT);
                Ok(())
            }
            ShellCommand::Text(text) => self.submit(&text),
            ShellCommand::Invalid(reason) => Err(ShellError::Input(reason)),
        };

        if let Err(error) = outcome {
            tracing::debug!(error = %error, "shell command rejected");
            self.state.error(error.to_string());
        }

        self.state.touch();
    }

    fn open(&mut self, selector: &str) -> Result<(), ShellError> {
        let contacts = self.messenger.contacts();
        let by_position = selector
            .parse::<usize>()
            .ok()
            .filter(|position| (1..=contacts.len()).contains(position))
            .map(|position| contacts[position - 1].id.clone());
        let contact_id = by_position
            .or_else(|| {
                let id = ContactId::new(selector);
                self.messenger.contact(&id).map(|contact| contact.id.clone())
            })
            .ok_or_else(|| CommandError::UnknownContact(ContactId::new(selector)))?;

        tracing::debug!(contact_id = %contact_id, "conversation opened");
        self.state.open(contact_id);
        Ok(())
    }

    fn menu(&mut self, position: usize) -> Result<(), ShellError> {
        let (contact_id, message_id) = self.target(position)?;
        let actions = commands::action_menu(&self.messenger, &contact_id, &message_id)?;
        let labels: Vec<_> = actions.iter().map(|action| action.label()).collect();
        self.state.info(format!("#{position}: {}", labels.join(", ")));
        Ok(())
    }

    fn begin_edit(&mut self, position: usize) -> Result<(), ShellError> {
        let (contact_id, message_id) = self.target(position)?;
        commands::begin_edit(&mut self.messenger, &contact_id, &message_id)?;
        self.state
            .info(format!("editing #{position}; type the new text or /cancel"));
        Ok(())
    }

    fn delete(&mut self, position: usize) -> Result<(), ShellError> {
        let (contact_id, message_id) = self.target(position)?;
        commands::delete_message(&mut self.messenger, &contact_id, &message_id)?;
        Ok(())
    }

    fn toggle_pin(&mut self, position: usize) -> Result<(), ShellError> {
        let (contact_id, message_id) = self.target(position)?;
        let pinned = commands::toggle_pin(&mut self.messenger, &contact_id, &message_id)?;
        self.state.info(if pinned {
            "message pinned"
        } else {
            "message unpinned"
        });
        Ok(())
    }

    fn cancel_replies(&mut self) -> Result<(), ShellError> {
        let contact_id = self.open_contact()?;
        let keys: Vec<_> = self
            .messenger
            .pending_replies()
            .filter(|key| key.contact_id == contact_id)
            .cloned()
            .collect();

        let mut cancelled = 0;
        for key in &keys {
            if self.messenger.cancel_reply(key) {
                cancelled += 1;
            }
        }
        self.state.info(match cancelled {
            0 => "no pending replies".to_owned(),
            1 => "1 pending reply cancelled".to_owned(),
            n => format!("{n} pending replies cancelled"),
        });
        Ok(())
    }

    /// Free text saves the active edit when there is one, otherwise sends.
    fn submit(&mut self, text: &str) -> Result<(), ShellError> {
        let contact_id = self.open_contact()?;

        if let Some(owner) = self.messenger.edit_conversation() {
            if owner != &contact_id {
                let name = self
                    .messenger
                    .contact(owner)
                    .map(|contact| contact.display_name.clone())
                    .unwrap_or_else(|| owner.to_string());
                return Err(ShellError::EditElsewhere(name));
            }
        }

        if self.messenger.edit_session().is_active() {
            self.messenger.set_edit_draft(text);
            commands::commit_edit(&mut self.messenger, &contact_id, text)?;
        } else {
            commands::send_message(
                &mut self.messenger,
                SendMessageCommand {
                    contact_id,
                    text: text.to_owned(),
                },
            )?;
        }

        Ok(())
    }

    fn open_contact(&self) -> Result<ContactId, ShellError> {
        self.state
            .open_contact()
            .cloned()
            .ok_or(ShellError::NoOpenConversation)
    }

    /// Resolves a 1-based display position in the open conversation.
    fn target(&self, position: usize) -> Result<(ContactId, MessageId), ShellError> {
        let contact_id = self.open_contact()?;
        let message_id = position
            .checked_sub(1)
            .and_then(|index| {
                self.messenger
                    .display_order(&contact_id)
                    .get(index)
                    .map(|message| message.id.clone())
            })
            .ok_or(ShellError::UnknownPosition(position))?;

        Ok((contact_id, message_id))
    }
}

#[derive(Debug, thiserror::Error)]
enum ShellError {
    #[error("open a conversation first")]
    NoOpenConversation,
    #[error("no message #{0} in this conversation")]
    UnknownPosition(usize),
    #[error("finish the edit in {0} first, or /cancel it")]
    EditElsewhere(String),
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl ShellOrchestrator for DefaultShellOrchestrator {
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn messenger(&self) -> &Messenger {
        &self.messenger
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                if self.messenger.run_due_replies() > 0 {
                    self.state.touch();
                }
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::Command(command) => self.handle_command(command),
        }

        Ok(())
    }
}
