//! Top-level owner of all chat state.
//!
//! `Messenger` holds the contact registry, every conversation, the single
//! edit slot and the reply timer queue. All mutations go through it on one
//! thread; reply delivery is just another mutation driven by
//! [`Messenger::run_due_replies`].

use crate::{
    domain::{
        contact::{Contact, ContactId, ContactRegistry},
        conversation::{ConversationError, ConversationStore, Stamp},
        display_order::display_order,
        edit_session::EditSession,
        message::{Message, MessageId},
    },
    infra::contracts::{Clock, IdGenerator},
    usecases::reply_simulator::{ReplyKey, ReplySimulator},
};

pub struct Messenger {
    contacts: ContactRegistry,
    store: ConversationStore,
    edit: EditSession,
    replies: ReplySimulator,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl std::fmt::Debug for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messenger")
            .field("contacts", &self.contacts.list().len())
            .field("edit", &self.edit)
            .field("pending_replies", &self.replies.pending().count())
            .finish_non_exhaustive()
    }
}

impl Messenger {
    pub fn new(
        contacts: Vec<Contact>,
        replies: ReplySimulator,
        clock: Box<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            contacts: ContactRegistry::with_contacts(contacts),
            store: ConversationStore::default(),
            edit: EditSession::default(),
            replies,
            clock,
            ids,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        self.contacts.list()
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.find(id)
    }

    pub fn add_contact(&mut self) -> Contact {
        let now = self.clock.now();
        let mut id = ContactId::new(self.ids.next_id(now));
        while self.contacts.contains(&id) {
            id = ContactId::new(self.ids.next_id(now));
        }

        let contact = self.contacts.add(id);
        tracing::debug!(contact_id = %contact.id, name = %contact.display_name, "contact added");
        contact
    }

    /// Appends an outbound message and schedules its auto-reply.
    pub fn send(&mut self, contact_id: &ContactId, text: &str) -> Result<Message, ConversationError> {
        let stamp = self.stamp();
        let scheduled_at = stamp.at;
        let message = self.store.send(contact_id, text, stamp)?.clone();

        self.replies
            .schedule(contact_id.clone(), message.id.clone(), scheduled_at);
        Ok(message)
    }

    pub fn receive(&mut self, contact_id: &ContactId, message: Message) {
        self.store.receive(contact_id, message);
    }

    pub fn begin_edit(&mut self, message_id: MessageId, current_text: &str) {
        if let Some(previous) = self.edit.target() {
            tracing::debug!(previous = %previous, next = %message_id, "edit session replaced");
        }
        self.edit.begin(message_id, current_text);
    }

    pub fn set_edit_draft(&mut self, text: &str) {
        self.edit.set_draft(text);
    }

    pub fn commit_edit(
        &mut self,
        contact_id: &ContactId,
        new_text: &str,
    ) -> Result<Message, ConversationError> {
        self.store
            .commit_edit(&mut self.edit, contact_id, new_text)
            .cloned()
    }

    /// Abandons the active edit. Returns false when nothing was being edited.
    pub fn cancel_edit(&mut self) -> bool {
        let cancelled = self.edit.cancel();
        if let Some(target) = &cancelled {
            tracing::debug!(message_id = %target, "edit session cancelled");
        }
        cancelled.is_some()
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    /// The conversation holding the message being edited.
    pub fn edit_conversation(&self) -> Option<&ContactId> {
        self.edit
            .target()
            .and_then(|target| self.store.locate(target))
    }

    /// Idempotent: a missing id is not an error and does not touch pending replies.
    pub fn delete(&mut self, contact_id: &ContactId, message_id: &MessageId) -> bool {
        self.store.delete(contact_id, message_id)
    }

    pub fn toggle_pin(
        &mut self,
        contact_id: &ContactId,
        message_id: &MessageId,
    ) -> Result<bool, ConversationError> {
        self.store.toggle_pin(contact_id, message_id)
    }

    pub fn conversation(&self, contact_id: &ContactId) -> &[Message] {
        self.store.conversation(contact_id)
    }

    pub fn find_message(&self, contact_id: &ContactId, message_id: &MessageId) -> Option<&Message> {
        self.store.find(contact_id, message_id)
    }

    pub fn display_order(&self, contact_id: &ContactId) -> Vec<&Message> {
        display_order(self.store.conversation(contact_id))
    }

    pub fn pending_replies(&self) -> impl Iterator<Item = &ReplyKey> {
        self.replies.pending()
    }

    pub fn cancel_reply(&mut self, key: &ReplyKey) -> bool {
        self.replies.cancel(key)
    }

    /// Delivers every reply whose delay has elapsed into the conversation it
    /// was scheduled for. Returns how many were delivered.
    pub fn run_due_replies(&mut self) -> usize {
        let due = self.replies.take_due(self.clock.now());

        for key in &due {
            let stamp = self.stamp();
            let reply = Message::incoming(stamp.id, self.replies.reply_text(), stamp.at);
            tracing::debug!(
                contact_id = %key.contact_id,
                trigger = %key.trigger,
                scheduled_at = %key.scheduled_at,
                reply_id = %reply.id,
                "auto-reply delivered"
            );
            self.receive(&key.contact_id, reply);
        }

        due.len()
    }

    fn stamp(&mut self) -> Stamp {
        let at = self.clock.now();
        Stamp {
            id: MessageId::new(self.ids.next_id(at)),
            at,
        }
    }
}
