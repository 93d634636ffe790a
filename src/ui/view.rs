use crate::{
    domain::{
        contact::ContactId,
        shell_state::{NoticeLevel, ShellState},
    },
    usecases::messenger::Messenger,
};

use super::{message_rendering::render_message, styles};

const CONTACTS_TITLE: &str = "Chat with loved ones";
const CONTACTS_HINT: &str = "/open <n> to chat, /add for a new contact, /help for commands";
const CHAT_HINT: &str = "type to send, /menu <n> for actions, /back for contacts";

/// Renders the current screen as terminal lines.
pub fn render(state: &ShellState, messenger: &Messenger, width: usize) -> Vec<String> {
    let mut lines = match state.open_contact() {
        Some(contact_id) => render_conversation(contact_id, messenger, width),
        None => render_contacts(messenger),
    };

    if let Some(notice) = state.notice() {
        let style = match notice.level {
            NoticeLevel::Info => styles::info_style(),
            NoticeLevel::Error => styles::error_style(),
        };
        lines.push(style.apply(notice.text.as_str()).to_string());
    }

    lines
}

fn render_contacts(messenger: &Messenger) -> Vec<String> {
    let mut lines = vec![styles::title_style().apply(CONTACTS_TITLE).to_string()];

    for (index, contact) in messenger.contacts().iter().enumerate() {
        let count = messenger.conversation(&contact.id).len();
        let summary = match count {
            0 => String::new(),
            1 => " (1 message)".to_owned(),
            n => format!(" ({n} messages)"),
        };
        lines.push(format!(
            "{:>2}. {}{}  {}",
            index + 1,
            styles::contact_name_style().apply(contact.display_name.as_str()),
            summary,
            styles::meta_style().apply(contact.photo_ref.as_str())
        ));
    }

    lines.push(styles::meta_style().apply(CONTACTS_HINT).to_string());
    lines
}

fn render_conversation(contact_id: &ContactId, messenger: &Messenger, width: usize) -> Vec<String> {
    let name = messenger
        .contact(contact_id)
        .map(|contact| contact.display_name.as_str())
        .unwrap_or(contact_id.as_str());

    let mut lines = vec![
        styles::title_style().apply(format!("< {name}")).to_string(),
        styles::meta_style().apply("─".repeat(width)).to_string(),
    ];

    let messages = messenger.display_order(contact_id);
    if messages.is_empty() {
        lines.push(styles::meta_style().apply("no messages yet").to_string());
    }
    for (index, message) in messages.iter().enumerate() {
        lines.push(render_message(index + 1, message, width));
    }

    if messenger
        .pending_replies()
        .any(|reply| &reply.contact_id == contact_id)
    {
        lines.push(styles::meta_style().apply(format!("{name} is typing...")).to_string());
    }

    if let (Some(draft), Some(owner)) = (
        messenger.edit_session().draft(),
        messenger.edit_conversation(),
    ) {
        let banner = if owner == contact_id {
            format!("editing: {draft}")
        } else {
            let owner_name = messenger
                .contact(owner)
                .map(|contact| contact.display_name.as_str())
                .unwrap_or(owner.as_str());
            format!("editing a message in {owner_name}; /cancel to drop it")
        };
        lines.push(styles::edit_banner_style().apply(banner).to_string());
    }

    lines.push(styles::meta_style().apply(CHAT_HINT).to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::contact::default_seed,
        infra::{clock::TimestampIds, stubs::ManualClock},
        usecases::reply_simulator::ReplySimulator,
    };

    fn messenger() -> (Messenger, ManualClock) {
        let clock = ManualClock::starting_at_millis(1_700_000_000_000);
        let messenger = Messenger::new(
            default_seed(),
            ReplySimulator::default(),
            Box::new(clock.clone()),
            Box::new(TimestampIds::default()),
        );
        (messenger, clock)
    }

    fn joined(lines: &[String]) -> String {
        lines.join("\n")
    }

    #[test]
    fn contact_list_shows_every_contact_with_position() {
        let (messenger, _clock) = messenger();

        let lines = render(&ShellState::default(), &messenger, 60);

        assert!(lines[0].contains(CONTACTS_TITLE));
        assert!(lines[1].contains(" 1. "));
        assert!(lines[1].contains("Jaimin"));
        assert!(lines[5].contains("Laksh"));
        assert!(lines[5].contains("https://i.pravatar.cc/150?img=5"));
    }

    #[test]
    fn contact_list_counts_messages() {
        let (mut messenger, _clock) = messenger();
        messenger
            .send(&ContactId::new("2"), "hey")
            .expect("send should succeed");

        let lines = render(&ShellState::default(), &messenger, 60);

        assert!(lines[2].contains("(1 message)"));
    }

    #[test]
    fn conversation_lists_pinned_first_and_shows_typing() {
        let (mut messenger, _clock) = messenger();
        let contact = ContactId::new("1");
        messenger.send(&contact, "first").expect("send should succeed");
        let second = messenger.send(&contact, "second").expect("send should succeed");
        messenger
            .toggle_pin(&contact, &second.id)
            .expect("pin should succeed");
        let mut state = ShellState::default();
        state.open(contact);

        let lines = render(&state, &messenger, 60);
        let text = joined(&lines);

        assert!(lines[0].contains("< Jaimin"));
        assert!(text.contains("1. second"));
        assert!(text.contains("2. first"));
        assert!(text.contains("Jaimin is typing..."));
    }

    #[test]
    fn typing_indicator_clears_after_reply() {
        let (mut messenger, clock) = messenger();
        let contact = ContactId::new("1");
        messenger.send(&contact, "hi").expect("send should succeed");
        clock.advance_ms(1_000);
        messenger.run_due_replies();
        let mut state = ShellState::default();
        state.open(contact);

        let text = joined(&render(&state, &messenger, 60));

        assert!(!text.contains("is typing"));
        assert!(text.contains("2. Auto-reply: Got your message!"));
    }

    #[test]
    fn empty_conversation_and_notices_are_rendered() {
        let (messenger, _clock) = messenger();
        let mut state = ShellState::default();
        state.open(ContactId::new("3"));
        state.error("no message #4 in this conversation");

        let text = joined(&render(&state, &messenger, 60));

        assert!(text.contains("no messages yet"));
        assert!(text.contains("no message #4 in this conversation"));
    }

    #[test]
    fn edit_banner_shows_draft() {
        let (mut messenger, _clock) = messenger();
        let contact = ContactId::new("1");
        let sent = messenger.send(&contact, "helo").expect("send should succeed");
        messenger.begin_edit(sent.id, "helo");
        let mut state = ShellState::default();
        state.open(contact);

        let text = joined(&render(&state, &messenger, 60));

        assert!(text.contains("editing: helo"));
    }

    #[test]
    fn edit_banner_points_elsewhere_from_other_conversations() {
        let (mut messenger, _clock) = messenger();
        let sent = messenger
            .send(&ContactId::new("1"), "helo")
            .expect("send should succeed");
        messenger.begin_edit(sent.id, "helo");
        let mut state = ShellState::default();
        state.open(ContactId::new("2"));

        let text = joined(&render(&state, &messenger, 60));

        assert!(!text.contains("editing: helo"));
        assert!(text.contains("editing a message in Jaimin; /cancel to drop it"));
    }
}
