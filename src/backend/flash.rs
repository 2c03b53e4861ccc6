//! Flash messages
//!
//! A write-once/read-once queue kept in the session under
//! [`FLASH_SESSION_KEY`]. Handlers push onto it; every successfully rendered
//! page drains it, so each message is displayed exactly once.

use crate::backend::middleware::session::Session;
use crate::shared::flash::FlashMessage;

/// Session key holding the flash queue
pub const FLASH_SESSION_KEY: &str = "_flash_messages";

/// Append a message to the queue
pub fn push(session: &Session, message: FlashMessage) {
    let mut queue: Vec<FlashMessage> = session.get(FLASH_SESSION_KEY).unwrap_or_default();
    queue.push(message);
    if let Err(e) = session.insert(FLASH_SESSION_KEY, queue) {
        tracing::error!("Failed to store flash message: {:?}", e);
    }
}

pub fn push_success(session: &Session, msg: impl Into<String>) {
    push(session, FlashMessage::success(msg));
}

pub fn push_critical(session: &Session, msg: impl Into<String>) {
    push(session, FlashMessage::critical(msg));
}

/// Read the queue without consuming it
pub fn peek(session: &Session) -> Vec<FlashMessage> {
    session.get(FLASH_SESSION_KEY).unwrap_or_default()
}

/// Take every queued message, leaving the queue empty
pub fn drain(session: &Session) -> Vec<FlashMessage> {
    session.remove(FLASH_SESSION_KEY).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::flash::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_drain_preserves_insertion_order() {
        let session = Session::default();
        push_success(&session, "first");
        push_critical(&session, "second");
        push_success(&session, "first");

        let messages = drain(&session);
        let texts: Vec<&str> = messages.iter().map(|m| m.msg.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "first"]);
        assert_eq!(messages[1].status, Severity::Critical);
    }

    #[test]
    fn test_drain_clears_queue() {
        let session = Session::default();
        push_success(&session, "once");

        assert_eq!(drain(&session).len(), 1);
        assert!(drain(&session).is_empty());
        assert!(session.is_empty());
    }

    #[test]
    fn test_peek_keeps_queue() {
        let session = Session::default();
        push_success(&session, "kept");

        assert_eq!(peek(&session).len(), 1);
        assert_eq!(drain(&session).len(), 1);
        assert!(peek(&session).is_empty());
    }

    #[test]
    fn test_drain_empty_session() {
        let session = Session::default();
        assert!(drain(&session).is_empty());
        assert!(!session.is_modified());
    }
}
