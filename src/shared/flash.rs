/**
 * Flash Message Types
 *
 * A flash message is a one-time notice shown to the user on the next page
 * render. The session keeps them in insertion order and the page that
 * renders them clears the queue.
 */

use serde::{Deserialize, Serialize};

/// Severity of a flash message
///
/// Serialized in lowercase, which is also the CSS class used by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Critical,
}

/// A single user-facing notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    /// Text shown to the user
    pub msg: String,
    /// success or critical
    pub status: Severity,
}

impl FlashMessage {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            status: Severity::Success,
        }
    }

    pub fn critical(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            status: Severity::Critical,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.status == Severity::Critical
    }
}
