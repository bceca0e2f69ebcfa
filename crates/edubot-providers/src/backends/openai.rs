use super::{AnswerProvider, Endpoint, TUTOR_PROMPT};
use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotResult, HistoryTurn, ProviderId};

/// OpenAI-compatible chat completions backend.
///
/// Serves both `chatgpt` (OpenAI) and `groq`, which exposes the same API
/// under its own host.
pub struct OpenAiBackend {
    id: ProviderId,
    endpoint: Endpoint,
    max_tokens: u32,
    http: reqwest::Client,
}

impl OpenAiBackend {
    /// Creates the backend for `id`, which must be `chatgpt` or `groq`.
    pub fn new(id: ProviderId, config: &ProvidersConfig, http: reqwest::Client) -> Self {
        let max_tokens = match id {
            ProviderId::Groq => 800,
            _ => 600,
        };
        Self {
            id,
            endpoint: Endpoint::for_provider(id, config),
            max_tokens,
            http,
        }
    }

    fn build_messages(&self, question: &str, history: &[HistoryTurn]) -> Vec<serde_json::Value> {
        let mut api_messages = Vec::with_capacity(history.len() + 2);
        api_messages.push(serde_json::json!({
            "role": "system",
            "content": TUTOR_PROMPT,
        }));
        for turn in history {
            api_messages.push(serde_json::json!({
                "role": turn.role.as_str(),
                "content": turn.content,
            }));
        }
        api_messages.push(serde_json::json!({
            "role": "user",
            "content": question,
        }));
        api_messages
    }
}

#[async_trait]
impl AnswerProvider for OpenAiBackend {
    fn id(&self) -> ProviderId {
        self.id
    }

    fn is_configured(&self) -> bool {
        self.endpoint.api_key.is_some()
    }

    async fn invoke(
        &self,
        question: &str,
        history: &[HistoryTurn],
    ) -> EdubotResult<Option<String>> {
        let url = format!("{}/v1/chat/completions", self.endpoint.base_url);
        let body = serde_json::json!({
            "model": self.endpoint.model,
            "messages": self.build_messages(question, history),
            "max_tokens": self.max_tokens,
            "temperature": 0.7,
        });

        let request = self
            .http
            .post(&url)
            .bearer_auth(self.endpoint.key())
            .json(&body);

        let resp_body = http::send_json(self.id, request).await?;
        Ok(Some(http::answer_at(&resp_body, "/choices/0/message/content")))
    }
}
