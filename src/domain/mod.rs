//! Domain layer: contacts, conversations and the edit slot.

pub mod contact;
pub mod conversation;
pub mod display_order;
pub mod edit_session;
pub mod events;
pub mod message;
pub mod shell_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
