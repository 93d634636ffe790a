//! Timer queue for the automated replies that follow each outbound message.
//!
//! Replies are scheduled against the injected clock and delivered when the
//! owner polls with a later time, so a manual clock drives them in tests.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{contact::ContactId, message::MessageId};

pub const DEFAULT_REPLY_TEXT: &str = "Auto-reply: Got your message!";
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1_000);

/// Identifies one pending reply.
///
/// The conversation is captured when the reply is scheduled; the triggering
/// message id keeps keys distinct for sends made within the same instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReplyKey {
    pub contact_id: ContactId,
    pub scheduled_at: DateTime<Utc>,
    pub trigger: MessageId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingReply {
    key: ReplyKey,
    due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplySimulator {
    delay: TimeDelta,
    text: String,
    pending: Vec<PendingReply>,
}

impl Default for ReplySimulator {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY, DEFAULT_REPLY_TEXT)
    }
}

impl ReplySimulator {
    pub fn new(delay: Duration, text: impl Into<String>) -> Self {
        Self {
            delay: TimeDelta::from_std(delay).unwrap_or(TimeDelta::MAX),
            text: text.into(),
            pending: Vec::new(),
        }
    }

    pub fn reply_text(&self) -> &str {
        &self.text
    }

    pub fn schedule(
        &mut self,
        contact_id: ContactId,
        trigger: MessageId,
        now: DateTime<Utc>,
    ) -> ReplyKey {
        let key = ReplyKey {
            contact_id,
            scheduled_at: now,
            trigger,
        };
        let due_at = now.checked_add_signed(self.delay).unwrap_or(DateTime::<Utc>::MAX_UTC);

        tracing::debug!(
            contact_id = %key.contact_id,
            trigger = %key.trigger,
            due_at = %due_at,
            "auto-reply scheduled"
        );

        self.pending.push(PendingReply {
            key: key.clone(),
            due_at,
        });
        key
    }

    /// Drops a pending reply. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, key: &ReplyKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|reply| &reply.key != key);
        let cancelled = self.pending.len() != before;
        if cancelled {
            tracing::debug!(contact_id = %key.contact_id, trigger = %key.trigger, "auto-reply cancelled");
        }
        cancelled
    }

    pub fn pending(&self) -> impl Iterator<Item = &ReplyKey> {
        self.pending.iter().map(|reply| &reply.key)
    }

    /// Removes and returns every reply due at or before `now`, earliest first.
    /// Replies due at the same instant come out in scheduling order.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<ReplyKey> {
        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|reply| reply.due_at <= now);
        self.pending = waiting;

        due.sort_by_key(|reply| reply.due_at);
        due.into_iter().map(|reply| reply.key).collect()
    }
}
