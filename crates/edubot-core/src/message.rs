use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text of the assistant message every fresh transcript starts with.
pub const WELCOME_TEXT: &str = "Hi, I'm EduBot. Ask me anything and I'll explain it clearly.";

/// The role of the participant that authored a [`Message`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human end-user.
    User,
    /// The assistant (a live provider or the local knowledge base).
    Assistant,
    /// A system-level instruction.
    System,
}

impl Role {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }

    /// True for the roles that are forwarded upstream as history.
    pub fn is_conversational(self) -> bool {
        matches!(self, Role::User | Role::Assistant)
    }
}

/// How an answer was produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Returned by an external provider.
    Live,
    /// Synthesised by the local knowledge base.
    Mock,
    /// Found by the automatic encyclopedia lookup.
    Wikipedia,
}

impl Mode {
    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Mock => "mock",
            Mode::Wikipedia => "wikipedia",
        }
    }
}

/// A single message within a transcript.
///
/// Messages are immutable once created; a transcript orders them by
/// insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique identifier for this message.
    pub id: String,
    /// The role of the message author.
    pub role: Role,
    /// The textual content of the message.
    pub content: String,
    /// UTC timestamp of when the message was created.
    pub timestamp: DateTime<Utc>,
    /// Which source answered (assistant messages only).
    #[serde(default)]
    pub provider: Option<String>,
    /// How the answer was produced (assistant messages only).
    #[serde(default)]
    pub mode: Option<Mode>,
}

impl Message {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            provider: None,
            mode: None,
        }
    }

    /// Creates a new message with [`Role::User`].
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates a new message with [`Role::Assistant`] tagged with its source.
    pub fn assistant(content: impl Into<String>, provider: impl Into<String>, mode: Mode) -> Self {
        Self {
            provider: Some(provider.into()),
            mode: Some(mode),
            ..Self::new(Role::Assistant, content)
        }
    }

    /// Creates a new message with [`Role::System`].
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// The untagged assistant greeting that seeds an empty transcript.
    pub fn welcome() -> Self {
        Self::new(Role::Assistant, WELCOME_TEXT)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
        assert!(msg.provider.is_none());
        assert!(msg.mode.is_none());
        assert!(Uuid::parse_str(&msg.id).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_assistant_carries_source() {
        let msg = Message::assistant("42", "groq", Mode::Live);
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.provider.as_deref(), Some("groq"));
        assert_eq!(msg.mode, Some(Mode::Live));
    }

    #[test]
    fn test_message_serialization_keeps_nulls() {
        let msg = Message::welcome();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json["provider"].is_null());
        assert!(json["mode"].is_null());

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"id":"1712","role":"user","content":"hi","timestamp":"2024-04-01T10:00:00.000Z"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, "1712");
        assert_eq!(msg.provider, None);
        assert_eq!(msg.mode, None);
    }

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(serde_json::to_string(&Mode::Wikipedia).unwrap(), "\"wikipedia\"");
        assert_eq!(Mode::Mock.as_str(), "mock");
        assert!(Role::User.is_conversational());
        assert!(!Role::System.is_conversational());
    }
}
