use super::message::Message;

/// Pinned messages first, each group keeping arrival order.
///
/// Recomputed on every call; the stored order is never touched.
pub fn display_order(messages: &[Message]) -> Vec<&Message> {
    let (mut pinned, unpinned): (Vec<&Message>, Vec<&Message>) =
        messages.iter().partition(|message| message.pinned);
    pinned.extend(unpinned);
    pinned
}
