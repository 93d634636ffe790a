//! Per-contact message threads and the mutations applied to them.
//!
//! The store is deliberately permissive about authorship: it will edit, pin
//! or delete any message it is asked to. Restricting those operations to the
//! user's own messages is the job of the command surface.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{
    contact::ContactId,
    edit_session::EditSession,
    message::{Message, MessageId},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("message text must not be empty")]
    InvalidInput,
    #[error("message {message_id} not found in conversation with {contact_id}")]
    NotFound {
        contact_id: ContactId,
        message_id: MessageId,
    },
    #[error("no edit in progress")]
    NoActiveEdit,
}

/// Id and timestamp for a message the store is about to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: MessageId,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationStore {
    conversations: HashMap<ContactId, Vec<Message>>,
}

impl ConversationStore {
    /// Messages exchanged with `contact_id` in arrival order.
    pub fn conversation(&self, contact_id: &ContactId) -> &[Message] {
        self.conversations
            .get(contact_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn find(&self, contact_id: &ContactId, message_id: &MessageId) -> Option<&Message> {
        self.conversation(contact_id)
            .iter()
            .find(|message| &message.id == message_id)
    }

    /// The conversation holding `message_id`, if any.
    pub fn locate(&self, message_id: &MessageId) -> Option<&ContactId> {
        self.conversations
            .iter()
            .find(|(_, messages)| messages.iter().any(|message| &message.id == message_id))
            .map(|(contact_id, _)| contact_id)
    }

    pub fn send(
        &mut self,
        contact_id: &ContactId,
        text: &str,
        stamp: Stamp,
    ) -> Result<&Message, ConversationError> {
        if text.trim().is_empty() {
            return Err(ConversationError::InvalidInput);
        }

        let message = Message::outgoing(stamp.id, text, stamp.at);
        tracing::debug!(contact_id = %contact_id, message_id = %message.id, "message sent");
        Ok(self.push(contact_id, message))
    }

    pub fn receive(&mut self, contact_id: &ContactId, message: Message) {
        tracing::debug!(contact_id = %contact_id, message_id = %message.id, "message received");
        self.push(contact_id, message);
    }

    /// Applies the active edit to its target inside `contact_id`'s thread.
    ///
    /// The session is cleared only when the edit lands; any failure leaves
    /// both the session and the conversation as they were.
    pub fn commit_edit(
        &mut self,
        session: &mut EditSession,
        contact_id: &ContactId,
        new_text: &str,
    ) -> Result<&Message, ConversationError> {
        let target = session
            .target()
            .cloned()
            .ok_or(ConversationError::NoActiveEdit)?;

        if new_text.trim().is_empty() {
            return Err(ConversationError::InvalidInput);
        }

        let index = self.position(contact_id, &target)?;
        session.cancel();

        let messages = self.thread_mut(contact_id);
        let message = &mut messages[index];
        message.text = new_text.to_owned();
        message.edited = true;
        tracing::debug!(contact_id = %contact_id, message_id = %target, "message edited");
        Ok(&*message)
    }

    /// Removes the message if present. Returns whether anything was removed;
    /// deleting an unknown id is not an error.
    pub fn delete(&mut self, contact_id: &ContactId, message_id: &MessageId) -> bool {
        let Some(messages) = self.conversations.get_mut(contact_id) else {
            return false;
        };

        let before = messages.len();
        messages.retain(|message| &message.id != message_id);
        let removed = messages.len() != before;
        if removed {
            tracing::debug!(contact_id = %contact_id, message_id = %message_id, "message deleted");
        }
        removed
    }

    /// Flips the pinned flag and returns the new state.
    pub fn toggle_pin(
        &mut self,
        contact_id: &ContactId,
        message_id: &MessageId,
    ) -> Result<bool, ConversationError> {
        let index = self.position(contact_id, message_id)?;
        let message = &mut self.thread_mut(contact_id)[index];
        message.pinned = !message.pinned;
        tracing::debug!(
            contact_id = %contact_id,
            message_id = %message_id,
            pinned = message.pinned,
            "message pin toggled"
        );
        Ok(message.pinned)
    }

    fn position(
        &self,
        contact_id: &ContactId,
        message_id: &MessageId,
    ) -> Result<usize, ConversationError> {
        self.conversation(contact_id)
            .iter()
            .position(|message| &message.id == message_id)
            .ok_or_else(|| ConversationError::NotFound {
                contact_id: contact_id.clone(),
                message_id: message_id.clone(),
            })
    }

    fn thread_mut(&mut self, contact_id: &ContactId) -> &mut Vec<Message> {
        self.conversations.entry(contact_id.clone()).or_default()
    }

    fn push(&mut self, contact_id: &ContactId, message: Message) -> &Message {
        let messages = self.thread_mut(contact_id);
        messages.push(message);
        &messages[messages.len() - 1]
    }
}
