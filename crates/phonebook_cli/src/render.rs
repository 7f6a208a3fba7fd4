//! Text rendering of store state and notifications.

use phonebook_core::{Contact, Notification, Severity};

const EMPTY_PHONEBOOK: &str = "Your phonebook is empty";

/// Renders the contact section: an empty-state line, or one line per
/// visible contact. A filter that matches nothing renders nothing.
pub fn render_contacts(total: usize, visible: &[&Contact]) -> String {
    if total == 0 {
        return EMPTY_PHONEBOOK.to_string();
    }
    visible
        .iter()
        .map(|contact| format!("{}: {}  [{}]", contact.name, contact.number, contact.id))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_notification(notification: &Notification) -> String {
    let marker = match notification.severity {
        Severity::Success => "ok",
        Severity::Error => "error",
    };
    format!("[{marker}] {}", notification.message)
}
