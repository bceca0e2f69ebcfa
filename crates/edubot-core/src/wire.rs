use crate::history::HistoryTurn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /api/chat` as sent by the session client.
///
/// The gateway parses bodies leniently through
/// [`ProviderRequest::from_json`](crate::ProviderRequest::from_json) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question text.
    pub question: String,
    /// Requested model identifier.
    pub model: String,
    /// Prior conversation, user/assistant turns only.
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
}

/// Body of every non-2xx gateway response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error text.
    pub error: String,
}

impl ErrorBody {
    /// Wraps an error message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Always `"ok"` when the server answers.
    pub status: String,
    /// Server time in Unix epoch milliseconds.
    pub timestamp: i64,
    /// Provider identifier → whether it is configured.
    pub providers: BTreeMap<String, bool>,
    /// Identifiers on the free tier.
    #[serde(rename = "freeTier")]
    pub free_tier: Vec<String>,
}

/// Body of `GET /api/prompts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptList {
    /// Suggested starter questions.
    #[serde(default)]
    pub prompts: Vec<String>,
}
