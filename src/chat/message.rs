//! Chat message types.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Typed by the person using the UI.
    User,
    /// Returned by the reply service.
    Assistant,
}

impl Role {
    /// Name shown above the message bubble.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant => "IlmAI",
        }
    }
}

/// A single entry in the conversation.
///
/// Messages are never edited after they are appended to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message.
    pub role: Role,
    /// Message body.
    pub text: String,
    /// Mode label attached to assistant replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_label: Option<String>,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            model_label: None,
        }
    }

    /// Create an assistant message labelled with the mode that produced it.
    pub fn assistant(text: impl Into<String>, model_label: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            model_label: Some(model_label.into()),
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::user("salam")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"salam"}"#);
    }

    #[test]
    fn assistant_carries_label() {
        let msg = Message::assistant("Zakat is...", "IlmAI Fast");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.model_label.as_deref(), Some("IlmAI Fast"));
        assert!(!msg.is_user());
    }
}
