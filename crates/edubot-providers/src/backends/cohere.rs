use super::{AnswerProvider, Endpoint};
use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotResult, HistoryTurn, ProviderId, Role};

const PREAMBLE: &str =
    "You are EduBot, a friendly educational AI assistant. Explain concepts clearly for students.";

/// Cohere chat backend.
pub struct CohereBackend {
    endpoint: Endpoint,
    http: reqwest::Client,
}

impl CohereBackend {
    /// Creates the backend from `config`.
    pub fn new(config: &ProvidersConfig, http: reqwest::Client) -> Self {
        Self {
            endpoint: Endpoint::for_provider(ProviderId::Cohere, config),
            http,
        }
    }
}

fn chat_history(history: &[HistoryTurn]) -> Vec<serde_json::Value> {
    history
        .iter()
        .map(|turn| {
            let role = match turn.role {
                Role::Assistant => "CHATBOT",
                _ => "USER",
            };
            serde_json::json!({ "role": role, "message": turn.content })
        })
        .collect()
}

#[async_trait]
impl AnswerProvider for CohereBackend {
    fn id(&self) -> ProviderId {
        ProviderId::Cohere
    }

    fn is_configured(&self) -> bool {
        self.endpoint.api_key.is_some()
    }

    async fn invoke(
        &self,
        question: &str,
        history: &[HistoryTurn],
    ) -> EdubotResult<Option<String>> {
        let url = format!("{}/v1/chat", self.endpoint.base_url);
        let body = serde_json::json!({
            "message": question,
            "chat_history": chat_history(history),
            "model": self.endpoint.model,
            "preamble": PREAMBLE,
        });

        let request = self
            .http
            .post(&url)
            .bearer_auth(self.endpoint.key())
            .json(&body);

        let resp_body = http::send_json(ProviderId::Cohere, request).await?;
        Ok(Some(http::answer_at(&resp_body, "/text")))
    }
}
