//! User-facing command surface.
//!
//! The store accepts any mutation it is given; this layer is where the
//! authorship rule lives. Edit, delete, pin and the action menu are only ever
//! issued for the user's own messages.

use thiserror::Error;

use crate::{
    domain::{
        contact::ContactId,
        conversation::ConversationError,
        message::{Message, MessageId},
    },
    usecases::messenger::Messenger,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("only your own messages can be changed")]
    NotOwnMessage,
    #[error("unknown contact {0}")]
    UnknownContact(ContactId),
    #[error(transparent)]
    Conversation(#[from] ConversationError),
}

/// Actions offered for a message the user wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAction {
    Edit,
    Delete,
    TogglePin,
}

impl MessageAction {
    pub const ALL: [MessageAction; 3] = [Self::Edit, Self::Delete, Self::TogglePin];

    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::TogglePin => "pin/unpin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub contact_id: ContactId,
    pub text: String,
}

pub fn send_message(
    messenger: &mut Messenger,
    command: SendMessageCommand,
) -> Result<Message, CommandError> {
    ensure_contact(messenger, &command.contact_id)?;
    Ok(messenger.send(&command.contact_id, &command.text)?)
}

pub fn action_menu(
    messenger: &Messenger,
    contact_id: &ContactId,
    message_id: &MessageId,
) -> Result<[MessageAction; 3], CommandError> {
    own_message(messenger, contact_id, message_id)?;
    Ok(MessageAction::ALL)
}

/// Opens the edit slot on `message_id` with its current text as the draft.
pub fn begin_edit(
    messenger: &mut Messenger,
    contact_id: &ContactId,
    message_id: &MessageId,
) -> Result<(), CommandError> {
    let current_text = own_message(messenger, contact_id, message_id)?.text.clone();
    messenger.begin_edit(message_id.clone(), &current_text);
    Ok(())
}

pub fn commit_edit(
    messenger: &mut Messenger,
    contact_id: &ContactId,
    new_text: &str,
) -> Result<Message, CommandError> {
    ensure_contact(messenger, contact_id)?;
    Ok(messenger.commit_edit(contact_id, new_text)?)
}

/// Returns whether a message was removed. A missing id is a no-op.
pub fn delete_message(
    messenger: &mut Messenger,
    contact_id: &ContactId,
    message_id: &MessageId,
) -> Result<bool, CommandError> {
    if let Some(message) = messenger.find_message(contact_id, message_id) {
        if !message.is_own() {
            return reject(contact_id, message_id);
        }
    }

    Ok(messenger.delete(contact_id, message_id))
}

pub fn toggle_pin(
    messenger: &mut Messenger,
    contact_id: &ContactId,
    message_id: &MessageId,
) -> Result<bool, CommandError> {
    own_message(messenger, contact_id, message_id)?;
    Ok(messenger.toggle_pin(contact_id, message_id)?)
}

fn own_message<'a>(
    messenger: &'a Messenger,
    contact_id: &ContactId,
    message_id: &MessageId,
) -> Result<&'a Message, CommandError> {
    let message = messenger
        .find_message(contact_id, message_id)
        .ok_or_else(|| ConversationError::NotFound {
            contact_id: contact_id.clone(),
            message_id: message_id.clone(),
        })?;

    if !message.is_own() {
        return reject(contact_id, message_id);
    }

    Ok(message)
}

fn reject<T>(contact_id: &ContactId, message_id: &MessageId) -> Result<T, CommandError> {
    tracing::debug!(
        contact_id = %contact_id,
        message_id = %message_id,
        "rejected change to a message the user did not write"
    );
    Err(CommandError::NotOwnMessage)
}

fn ensure_contact(messenger: &Messenger, contact_id: &ContactId) -> Result<(), CommandError> {
    if messenger.contact(contact_id).is_none() {
        return Err(CommandError::UnknownContact(contact_id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::contact::default_seed,
        infra::{clock::TimestampIds, stubs::ManualClock},
        usecases::reply_simulator::ReplySimulator,
    };

    struct Fixture {
        messenger: Messenger,
        own: Message,
        other: Message,
    }

    fn alice() -> ContactId {
        ContactId::new("1")
    }

    /// One own message followed by its delivered auto-reply.
    fn fixture() -> Fixture {
        let clock = ManualClock::starting_at_millis(1_700_000_000_000);
        let mut messenger = Messenger::new(
            default_seed(),
            ReplySimulator::default(),
            Box::new(clock.clone()),
            Box::new(TimestampIds::default()),
        );
        let own = send(&mut messenger, "mine");
        clock.advance_ms(1_000);
        messenger.run_due_replies();
        let other = messenger.conversation(&alice())[1].clone();

        Fixture {
            messenger,
            own,
            other,
        }
    }

    fn send(messenger: &mut Messenger, text: &str) -> Message {
        send_message(
            messenger,
            SendMessageCommand {
                contact_id: alice(),
                text: text.to_owned(),
            },
        )
        .expect("send should succeed")
    }

    #[test]
    fn send_to_unknown_contact_is_rejected() {
        let mut fx = fixture();

        let result = send_message(
            &mut fx.messenger,
            SendMessageCommand {
                contact_id: ContactId::new("nobody"),
                text: "hi".to_owned(),
            },
        );

        assert_eq!(
            result,
            Err(CommandError::UnknownContact(ContactId::new("nobody")))
        );
        assert_eq!(fx.messenger.pending_replies().count(), 0);
    }

    #[test]
    fn send_surfaces_invalid_input() {
        let mut fx = fixture();

        let result = send_message(
            &mut fx.messenger,
            SendMessageCommand {
                contact_id: alice(),
                text: " ".to_owned(),
            },
        );

        assert_eq!(
            result,
            Err(CommandError::Conversation(ConversationError::InvalidInput))
        );
    }

    #[test]
    fn action_menu_is_offered_for_own_messages_only() {
        let fx = fixture();

        assert_eq!(
            action_menu(&fx.messenger, &alice(), &fx.own.id),
            Ok(MessageAction::ALL)
        );
        assert_eq!(
            action_menu(&fx.messenger, &alice(), &fx.other.id),
            Err(CommandError::NotOwnMessage)
        );
    }

    #[test]
    fn other_messages_cannot_be_edited_deleted_or_pinned() {
        let mut fx = fixture();
        let before = fx.messenger.conversation(&alice()).to_vec();

        assert_eq!(
            begin_edit(&mut fx.messenger, &alice(), &fx.other.id),
            Err(CommandError::NotOwnMessage)
        );
        assert_eq!(
            delete_message(&mut fx.messenger, &alice(), &fx.other.id),
            Err(CommandError::NotOwnMessage)
        );
        assert_eq!(
            toggle_pin(&mut fx.messenger, &alice(), &fx.other.id),
            Err(CommandError::NotOwnMessage)
        );

        assert_eq!(fx.messenger.conversation(&alice()), before.as_slice());
        assert!(!fx.messenger.edit_session().is_active());
    }

    #[test]
    fn begin_edit_preloads_current_text() {
        let mut fx = fixture();

        begin_edit(&mut fx.messenger, &alice(), &fx.own.id).expect("edit should begin");

        assert_eq!(fx.messenger.edit_session().target(), Some(&fx.own.id));
        assert_eq!(fx.messenger.edit_session().draft(), Some("mine"));
    }

    #[test]
    fn edit_round_trip_marks_message_edited() {
        let mut fx = fixture();
        begin_edit(&mut fx.messenger, &alice(), &fx.own.id).expect("edit should begin");

        let edited =
            commit_edit(&mut fx.messenger, &alice(), "still mine").expect("edit should land");

        assert_eq!(edited.text, "still mine");
        assert!(edited.edited);
        assert_eq!(
            commit_edit(&mut fx.messenger, &alice(), "again"),
            Err(CommandError::Conversation(ConversationError::NoActiveEdit))
        );
    }

    #[test]
    fn delete_of_missing_message_is_a_no_op() {
        let mut fx = fixture();

        let removed = delete_message(&mut fx.messenger, &alice(), &MessageId::new("gone"))
            .expect("missing delete should not fail");

        assert!(!removed);
        assert_eq!(fx.messenger.conversation(&alice()).len(), 2);
    }

    #[test]
    fn delete_and_pin_apply_to_own_messages() {
        let mut fx = fixture();
        let second = send(&mut fx.messenger, "second");

        assert_eq!(
            toggle_pin(&mut fx.messenger, &alice(), &second.id),
            Ok(true)
        );
        assert_eq!(
            delete_message(&mut fx.messenger, &alice(), &fx.own.id),
            Ok(true)
        );
        assert_eq!(fx.messenger.display_order(&alice())[0].id, second.id);
    }

    #[test]
    fn pin_of_missing_message_is_not_found() {
        let mut fx = fixture();

        let result = toggle_pin(&mut fx.messenger, &alice(), &MessageId::new("gone"));

        assert!(matches!(
            result,
            Err(CommandError::Conversation(ConversationError::NotFound { .. }))
        ));
    }
}
