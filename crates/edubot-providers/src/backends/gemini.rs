use super::{AnswerProvider, Endpoint};
use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotResult, HistoryTurn, ProviderId};

/// Google Gemini `generateContent` backend.
///
/// Gemini gets the conversation flattened into a single text part: one
/// `(role) content` line per turn, a blank line, then the question.
pub struct GeminiBackend {
    endpoint: Endpoint,
    http: reqwest::Client,
}

impl GeminiBackend {
    /// Creates the backend from `config`.
    pub fn new(config: &ProvidersConfig, http: reqwest::Client) -> Self {
        Self {
            endpoint: Endpoint::for_provider(ProviderId::Gemini, config),
            http,
        }
    }
}

pub(crate) fn flatten_prompt(question: &str, history: &[HistoryTurn]) -> String {
    let context = history
        .iter()
        .map(|turn| format!("({}) {}", turn.role.as_str(), turn.content))
        .collect::<Vec<_>>()
        .join("\n");
    if context.is_empty() {
        question.to_string()
    } else {
        format!("{context}\n\n{question}")
    }
}

#[async_trait]
impl AnswerProvider for GeminiBackend {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn is_configured(&self) -> bool {
        self.endpoint.api_key.is_some()
    }

    async fn invoke(
        &self,
        question: &str,
        history: &[HistoryTurn],
    ) -> EdubotResult<Option<String>> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.base_url, self.endpoint.model
        );
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": flatten_prompt(question, history) }]
            }]
        });

        let request = self
            .http
            .post(&url)
            .query(&[("key", self.endpoint.key())])
            .json(&body);

        let resp_body = http::send_json(ProviderId::Gemini, request).await?;
        Ok(Some(http::answer_at(
            &resp_body,
            "/candidates/0/content/parts/0/text",
        )))
    }
}
