use super::{AnswerProvider, Endpoint};
use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotResult, HistoryTurn, ProviderId};

/// Hugging Face Inference API backend for instruction-tuned text models.
pub struct HuggingFaceBackend {
    endpoint: Endpoint,
    http: reqwest::Client,
}

impl HuggingFaceBackend {
    /// Creates the backend from `config`.
    pub fn new(config: &ProvidersConfig, http: reqwest::Client) -> Self {
        Self {
            endpoint: Endpoint::for_provider(ProviderId::HuggingFace, config),
            http,
        }
    }
}

fn build_prompt(question: &str, history: &[HistoryTurn]) -> String {
    let mut prompt = String::new();
    for turn in history {
        prompt.push_str(turn.role.as_str());
        prompt.push_str(": ");
        prompt.push_str(&turn.content);
        prompt.push('\n');
    }
    prompt.push_str("user: ");
    prompt.push_str(question);
    prompt.push_str("\nassistant:");
    prompt
}

#[async_trait]
impl AnswerProvider for HuggingFaceBackend {
    fn id(&self) -> ProviderId {
        ProviderId::HuggingFace
    }

    fn is_configured(&self) -> bool {
        self.endpoint.api_key.is_some()
    }

    async fn invoke(
        &self,
        question: &str,
        history: &[HistoryTurn],
    ) -> EdubotResult<Option<String>> {
        let url = format!("{}/models/{}", self.endpoint.base_url, self.endpoint.model);
        let body = serde_json::json!({
            "inputs": build_prompt(question, history),
            "parameters": {
                "max_new_tokens": 500,
                "temperature": 0.7,
                "return_full_text": false,
            }
        });

        let request = self
            .http
            .post(&url)
            .bearer_auth(self.endpoint.key())
            .json(&body);

        let resp_body = http::send_json(ProviderId::HuggingFace, request).await?;
        Ok(Some(http::answer_at(&resp_body, "/0/generated_text")))
    }
}
