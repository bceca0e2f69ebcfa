use super::{AnswerProvider, Endpoint};
use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotResult, HistoryTurn, ProviderId};

const SYSTEM_PROMPT: &str = "You are EduBot, a helpful educational AI tutor. Provide clear, structured explanations suitable for students.";

/// Anthropic Messages API backend.
pub struct ClaudeBackend {
    endpoint: Endpoint,
    http: reqwest::Client,
}

impl ClaudeBackend {
    /// Creates the backend from `config`.
    pub fn new(config: &ProvidersConfig, http: reqwest::Client) -> Self {
        Self {
            endpoint: Endpoint::for_provider(ProviderId::Claude, config),
            http,
        }
    }
}

#[async_trait]
impl AnswerProvider for ClaudeBackend {
    fn id(&self) -> ProviderId {
        ProviderId::Claude
    }

    fn is_configured(&self) -> bool {
        self.endpoint.api_key.is_some()
    }

    async fn invoke(
        &self,
        question: &str,
        history: &[HistoryTurn],
    ) -> EdubotResult<Option<String>> {
        let url = format!("{}/v1/messages", self.endpoint.base_url);

        let mut messages: Vec<serde_json::Value> = history
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_str(),
                    "content": turn.content,
                })
            })
            .collect();
        messages.push(serde_json::json!({"role": "user", "content": question}));

        let body = serde_json::json!({
            "model": self.endpoint.model,
            "max_tokens": 1024,
            "system": SYSTEM_PROMPT,
            "messages": messages,
        });

        let request = self
            .http
            .post(&url)
            .header("x-api-key", self.endpoint.key())
            .header("anthropic-version", "2023-06-01")
            .json(&body);

        let resp_body = http::send_json(ProviderId::Claude, request).await?;
        Ok(Some(http::answer_at(&resp_body, "/content/0/text")))
    }
}
