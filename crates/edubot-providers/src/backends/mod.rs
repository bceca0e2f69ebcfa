/// Anthropic Messages API.
pub mod claude;
/// Cohere chat.
pub mod cohere;
/// Google Gemini.
pub mod gemini;
/// Hugging Face inference.
pub mod huggingface;
/// OpenAI-compatible chat completions (OpenAI, Groq).
pub mod openai;
/// Wikipedia page summaries.
pub mod wikipedia;

use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotResult, HistoryTurn, ProviderId};

/// Tutor persona sent to OpenAI-style chat APIs.
pub const TUTOR_PROMPT: &str =
    "You are EduBot, a friendly educational tutor. Explain topics in simple, structured language.";

/// Trait for answer sources.
///
/// Each upstream service (Gemini, Groq, Wikipedia, etc.) implements this
/// trait. The resolver walks a priority-ordered list of these instead of
/// branching on model names.
///
/// To add a new provider:
/// 1. Create a new module in `backends/`
/// 2. Implement `AnswerProvider` for your struct
/// 3. Add the variant to `ProviderId` in `edubot-core`
/// 4. Wire it up in [`default_providers`]
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Which model identifier this provider serves.
    fn id(&self) -> ProviderId;

    /// Whether the provider has what it needs to be called.
    fn is_configured(&self) -> bool;

    /// Asks the provider once.
    ///
    /// `Ok(None)` means the provider had nothing for this question; only the
    /// encyclopedia returns it. Live services return `Ok(Some(_))` or a
    /// [`ProviderFailure`](edubot_core::EdubotError::ProviderFailure).
    async fn invoke(&self, question: &str, history: &[HistoryTurn])
        -> EdubotResult<Option<String>>;
}

/// Builds every provider in priority order from `config`.
pub fn default_providers(config: &ProvidersConfig) -> EdubotResult<Vec<Box<dyn AnswerProvider>>> {
    let client = http::client(config.timeout())?;

    let providers: Vec<Box<dyn AnswerProvider>> = ProviderId::ALL
        .into_iter()
        .map(|id| -> Box<dyn AnswerProvider> {
            let http = client.clone();
            match id {
                ProviderId::Gemini => Box::new(gemini::GeminiBackend::new(config, http)),
                ProviderId::Groq | ProviderId::ChatGpt => {
                    Box::new(openai::OpenAiBackend::new(id, config, http))
                }
                ProviderId::Cohere => Box::new(cohere::CohereBackend::new(config, http)),
                ProviderId::HuggingFace => {
                    Box::new(huggingface::HuggingFaceBackend::new(config, http))
                }
                ProviderId::Wikipedia => Box::new(wikipedia::WikipediaBackend::new(config, http)),
                ProviderId::Claude => Box::new(claude::ClaudeBackend::new(config, http)),
            }
        })
        .collect();

    Ok(providers)
}

/// Credential-bearing fields common to every keyed backend.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Endpoint {
    pub(crate) fn for_provider(id: ProviderId, config: &ProvidersConfig) -> Self {
        Self {
            api_key: config.api_key(id),
            base_url: config.base_url(id),
            model: config.model(id),
        }
    }

    pub(crate) fn key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_providers_follow_priority_order() {
        let providers = default_providers(&ProvidersConfig::default()).unwrap();
        let ids: Vec<ProviderId> = providers.iter().map(|p| p.id()).collect();
        assert_eq!(ids, ProviderId::ALL.to_vec());
    }

    #[test]
    fn test_only_wikipedia_is_configured_without_keys() {
        let providers = default_providers(&ProvidersConfig::default()).unwrap();
        let configured: Vec<ProviderId> = providers
            .iter()
            .filter(|p| p.is_configured())
            .map(|p| p.id())
            .collect();
        assert_eq!(configured, vec![ProviderId::Wikipedia]);
    }

    #[test]
    fn test_key_makes_provider_configured() {
        let mut config = ProvidersConfig::default();
        config.claude.api_key = Some("sk-ant".into());
        let providers = default_providers(&config).unwrap();
        let claude = providers
            .iter()
            .find(|p| p.id() == ProviderId::Claude)
            .unwrap();
        assert!(claude.is_configured());
    }
}
