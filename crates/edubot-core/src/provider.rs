use crate::error::{EdubotError, EdubotResult};
use crate::history::{normalize_history, HistoryTurn};
use crate::message::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message used when a request names no model or an unknown one.
pub const INVALID_MODEL: &str = "Invalid or missing model.";
/// Message used when a request carries no usable question.
pub const MISSING_QUESTION: &str = "Question is required.";

/// Every model identifier the resolver recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Google Gemini (free tier).
    Gemini,
    /// Groq cloud inference, OpenAI-compatible (free tier).
    Groq,
    /// Cohere chat (free tier).
    Cohere,
    /// Hugging Face inference API (free tier).
    HuggingFace,
    /// Wikipedia page summaries. Needs no credential.
    Wikipedia,
    /// OpenAI chat completions (paid).
    ChatGpt,
    /// Anthropic messages API (paid).
    Claude,
}

impl ProviderId {
    /// All identifiers in resolver priority order: free tier first, then paid.
    pub const ALL: [ProviderId; 7] = [
        ProviderId::Gemini,
        ProviderId::Groq,
        ProviderId::Cohere,
        ProviderId::HuggingFace,
        ProviderId::Wikipedia,
        ProviderId::ChatGpt,
        ProviderId::Claude,
    ];

    /// Wire identifier, as accepted in the `model` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::Groq => "groq",
            ProviderId::Cohere => "cohere",
            ProviderId::HuggingFace => "huggingface",
            ProviderId::Wikipedia => "wikipedia",
            ProviderId::ChatGpt => "chatgpt",
            ProviderId::Claude => "claude",
        }
    }

    /// Name used in provider error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderId::Gemini => "Gemini",
            ProviderId::Groq => "Groq",
            ProviderId::Cohere => "Cohere",
            ProviderId::HuggingFace => "HuggingFace",
            ProviderId::Wikipedia => "Wikipedia",
            ProviderId::ChatGpt => "ChatGPT",
            ProviderId::Claude => "Claude",
        }
    }

    /// Environment variable holding the provider credential, if it needs one.
    pub fn credential_env(self) -> Option<&'static str> {
        match self {
            ProviderId::Gemini => Some("GEMINI_API_KEY"),
            ProviderId::Groq => Some("GROQ_API_KEY"),
            ProviderId::Cohere => Some("COHERE_API_KEY"),
            ProviderId::HuggingFace => Some("HUGGINGFACE_API_KEY"),
            ProviderId::Wikipedia => None,
            ProviderId::ChatGpt => Some("OPENAI_API_KEY"),
            ProviderId::Claude => Some("ANTHROPIC_API_KEY"),
        }
    }

    /// Whether this is the encyclopedia lookup rather than a live AI service.
    pub fn is_encyclopedia(self) -> bool {
        self == ProviderId::Wikipedia
    }

    /// Pricing tier reported alongside live answers.
    pub fn cost_tier(self) -> CostTier {
        match self {
            ProviderId::ChatGpt | ProviderId::Claude => CostTier::Paid,
            _ => CostTier::Free,
        }
    }

    /// Identifiers on the free tier, in priority order.
    pub fn free_tier() -> impl Iterator<Item = ProviderId> {
        Self::ALL
            .into_iter()
            .filter(|id| id.cost_tier() == CostTier::Free)
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = EdubotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EdubotError::InvalidRequest(INVALID_MODEL.to_string()))
    }
}

/// Pricing tier of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CostTier {
    /// No charge (free tier or public API).
    Free,
    /// Billed per request.
    Paid,
}

/// A validated question for the provider resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    /// The question text. Never blank.
    pub question: String,
    /// The requested answer source.
    pub model_id: ProviderId,
    /// Prior user/assistant turns, oldest first.
    pub history: Vec<HistoryTurn>,
}

impl ProviderRequest {
    /// Validates the parts of a request.
    ///
    /// Fails with [`EdubotError::InvalidRequest`] when the question is blank
    /// or the model is missing or unrecognised.
    pub fn new(
        question: impl Into<String>,
        model: Option<&str>,
        history: Vec<HistoryTurn>,
    ) -> EdubotResult<Self> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(EdubotError::InvalidRequest(MISSING_QUESTION.to_string()));
        }
        let model_id = model
            .ok_or_else(|| EdubotError::InvalidRequest(INVALID_MODEL.to_string()))?
            .parse()?;
        Ok(Self {
            question,
            model_id,
            history,
        })
    }

    /// Validates an untyped JSON request body.
    ///
    /// A non-string `question` counts as missing. Malformed history entries
    /// are dropped rather than rejected.
    pub fn from_json(body: &serde_json::Value) -> EdubotResult<Self> {
        let question = body
            .get("question")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();
        let model = body.get("model").and_then(serde_json::Value::as_str);
        let history = body
            .get("history")
            .and_then(serde_json::Value::as_array)
            .map(|items| normalize_history(items))
            .unwrap_or_default();
        Self::new(question, model, history)
    }

    /// Lowercased question, used by the text heuristics.
    pub fn lowercase_question(&self) -> String {
        self.question.to_lowercase()
    }
}

/// The uniform answer envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// The answer text. Never empty.
    pub answer: String,
    /// Identifier of the source that produced the answer.
    pub provider: String,
    /// How the answer was produced.
    pub mode: Mode,
    /// Pricing tier, present for provider answers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostTier>,
}

impl ProviderResponse {
    /// An answer from the requested live provider.
    pub fn live(id: ProviderId, answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            provider: id.as_str().to_string(),
            mode: Mode::Live,
            cost: Some(id.cost_tier()),
        }
    }

    /// An answer from the automatic encyclopedia lookup.
    pub fn encyclopedia(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            provider: ProviderId::Wikipedia.as_str().to_string(),
            mode: Mode::Wikipedia,
            cost: Some(CostTier::Free),
        }
    }

    /// A knowledge-base answer, attributed to the model that was asked for.
    pub fn mock(requested: ProviderId, answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            provider: requested.as_str().to_string(),
            mode: Mode::Mock,
            cost: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::message::Role;
    use serde_json::json;

    #[test]
    fn test_parse_every_identifier() {
        for id in ProviderId::ALL {
            assert_eq!(id.as_str().parse::<ProviderId>().unwrap(), id);
            assert_eq!(serde_json::to_value(id).unwrap(), json!(id.as_str()));
        }
    }

    #[test]
    fn test_unknown_identifier_is_invalid_request() {
        let err = "not-a-real-model".parse::<ProviderId>().unwrap_err();
        assert!(err.is_invalid_request());
        assert_eq!(err.detail(), INVALID_MODEL);
        assert!("Gemini".parse::<ProviderId>().is_err());
    }

    #[test]
    fn test_cost_tiers() {
        assert_eq!(ProviderId::Claude.cost_tier(), CostTier::Paid);
        assert_eq!(ProviderId::Wikipedia.cost_tier(), CostTier::Free);
        let free: Vec<_> = ProviderId::free_tier().map(ProviderId::as_str).collect();
        assert_eq!(free, ["gemini", "groq", "cohere", "huggingface", "wikipedia"]);
        assert_eq!(serde_json::to_string(&CostTier::Paid).unwrap(), "\"PAID\"");
    }

    #[test]
    fn test_only_wikipedia_needs_no_credential() {
        for id in ProviderId::ALL {
            assert_eq!(id.credential_env().is_none(), id.is_encyclopedia());
        }
    }

    #[test]
    fn test_request_validation() {
        assert!(ProviderRequest::new("What is DNA?", Some("groq"), vec![]).is_ok());

        let err = ProviderRequest::new("   ", Some("groq"), vec![]).unwrap_err();
        assert_eq!(err.detail(), MISSING_QUESTION);

        let err = ProviderRequest::new("What is DNA?", None, vec![]).unwrap_err();
        assert_eq!(err.detail(), INVALID_MODEL);
    }

    #[test]
    fn test_request_from_json() {
        let body = json!({
            "question": "Explain gravity",
            "model": "claude",
            "history": [
                {"role": "user", "content": "hello"},
                {"role": "system", "content": "ignored"},
                {"role": "assistant"},
                "garbage",
                {"role": "assistant", "content": "hi there"}
            ]
        });
        let req = ProviderRequest::from_json(&body).unwrap();
        assert_eq!(req.model_id, ProviderId::Claude);
        assert_eq!(req.history.len(), 2);
        assert_eq!(req.history[1].role, Role::Assistant);
    }

    #[test]
    fn test_request_from_json_rejects_non_string_question() {
        let err = ProviderRequest::from_json(&json!({"question": 7, "model": "groq"})).unwrap_err();
        assert_eq!(err.detail(), MISSING_QUESTION);

        let err = ProviderRequest::from_json(&json!([1, 2, 3])).unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_response_constructors() {
        let live = ProviderResponse::live(ProviderId::ChatGpt, "hi");
        assert_eq!(live.provider, "chatgpt");
        assert_eq!(live.mode, Mode::Live);
        assert_eq!(live.cost, Some(CostTier::Paid));

        let mock = ProviderResponse::mock(ProviderId::Gemini, "hi");
        let json = serde_json::to_value(&mock).unwrap();
        assert_eq!(json["mode"], "mock");
        assert_eq!(json["provider"], "gemini");
        assert!(json.get("cost").is_none());

        let wiki = ProviderResponse::encyclopedia("Photosynthesis is...");
        assert_eq!(wiki.mode, Mode::Wikipedia);
    }
}
