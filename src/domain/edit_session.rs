//! The single, global in-progress edit slot.

use super::message::MessageId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Active { target: MessageId, draft: String },
}

impl EditSession {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn target(&self) -> Option<&MessageId> {
        match self {
            Self::Active { target, .. } => Some(target),
            Self::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Active { draft, .. } => Some(draft),
            Self::Idle => None,
        }
    }

    /// Starts editing `target`, replacing any session already in progress.
    pub fn begin(&mut self, target: MessageId, current_text: impl Into<String>) {
        *self = Self::Active {
            target,
            draft: current_text.into(),
        };
    }

    /// Replaces the draft text. Ignored while idle.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Self::Active { draft, .. } = self {
            *draft = text.into();
        }
    }

    /// Returns to idle, handing back the abandoned target if there was one.
    pub fn cancel(&mut self) -> Option<MessageId> {
        match std::mem::take(self) {
            Self::Active { target, .. } => Some(target),
            Self::Idle => None,
        }
    }
}
