use crate::message::{Message, Role};
use serde::{Deserialize, Serialize};

/// One conversational turn forwarded to a provider as context.
///
/// Carries only role and content: ids, timestamps and provider tags stay in
/// the local transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    /// Either [`Role::User`] or [`Role::Assistant`].
    pub role: Role,
    /// The turn text.
    pub content: String,
}

impl HistoryTurn {
    /// Creates a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Projects a transcript onto the history sent upstream.
pub fn api_history(messages: &[Message]) -> Vec<HistoryTurn> {
    messages
        .iter()
        .filter(|m| m.role.is_conversational())
        .map(|m| HistoryTurn {
            role: m.role,
            content: m.content.clone(),
        })
        .collect()
}

/// Cleans untrusted history from a request body.
///
/// Keeps entries that are objects with a `user` or `assistant` role and a
/// non-empty string content; everything else is dropped silently.
pub fn normalize_history(items: &[serde_json::Value]) -> Vec<HistoryTurn> {
    items
        .iter()
        .filter_map(|item| {
            let role = match item.get("role")?.as_str()? {
                "user" => Role::User,
                "assistant" => Role::Assistant,
                _ => return None,
            };
            let content = item.get("content")?.as_str()?;
            if content.is_empty() {
                return None;
            }
            Some(HistoryTurn {
                role,
                content: content.to_string(),
            })
        })
        .collect()
}
