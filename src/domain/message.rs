use std::fmt;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author of a message. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    /// Written by the local user.
    Own,
    /// Received from the contact.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub seen: bool,
    pub edited: bool,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn outgoing(id: MessageId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Own,
            seen: false,
            edited: false,
            pinned: false,
            created_at,
        }
    }

    /// Inbound messages count as seen as soon as they arrive.
    pub fn incoming(id: MessageId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Other,
            seen: true,
            edited: false,
            pinned: false,
            created_at,
        }
    }

    pub fn is_own(&self) -> bool {
        self.sender == Sender::Own
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
    }

    #[test]
    fn outgoing_message_starts_unseen_unedited_unpinned() {
        let message = Message::outgoing(MessageId::new("1"), "hello", at());

        assert_eq!(message.sender, Sender::Own);
        assert!(message.is_own());
        assert!(!message.seen);
        assert!(!message.edited);
        assert!(!message.pinned);
    }

    #[test]
    fn incoming_message_is_seen_immediately() {
        let message = Message::incoming(MessageId::new("2"), "ack", at());

        assert_eq!(message.sender, Sender::Other);
        assert!(!message.is_own());
        assert!(message.seen);
        assert!(!message.edited);
        assert!(!message.pinned);
    }
}
