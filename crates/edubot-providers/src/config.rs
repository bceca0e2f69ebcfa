use edubot_core::ProviderId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for one upstream provider.
///
/// Every field is optional: an absent `api_key` leaves the provider
/// unconfigured, absent `base_url` and `model` fall back to the provider's
/// public defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Credential. Empty strings count as absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Override for the API host, mainly for tests and proxies.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Override for the model name.
    #[serde(default)]
    pub model: Option<String>,
}

impl ProviderSettings {
    /// The credential, if present and non-empty.
    pub fn key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

/// Settings for every upstream provider plus the shared call deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Per-call deadline in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Google Gemini.
    #[serde(default)]
    pub gemini: ProviderSettings,
    /// Groq.
    #[serde(default)]
    pub groq: ProviderSettings,
    /// Cohere.
    #[serde(default)]
    pub cohere: ProviderSettings,
    /// Hugging Face inference.
    #[serde(default)]
    pub huggingface: ProviderSettings,
    /// Wikipedia summaries. Needs no key.
    #[serde(default)]
    pub wikipedia: ProviderSettings,
    /// OpenAI chat completions.
    #[serde(default)]
    pub chatgpt: ProviderSettings,
    /// Anthropic messages.
    #[serde(default)]
    pub claude: ProviderSettings,
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            gemini: ProviderSettings::default(),
            groq: ProviderSettings::default(),
            cohere: ProviderSettings::default(),
            huggingface: ProviderSettings::default(),
            wikipedia: ProviderSettings::default(),
            chatgpt: ProviderSettings::default(),
            claude: ProviderSettings::default(),
        }
    }
}

impl ProvidersConfig {
    /// Fills every missing credential from `lookup`, keyed by the
    /// provider's environment variable name. Keys already set win.
    pub fn with_env_keys(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for id in ProviderId::ALL {
            let Some(var) = id.credential_env() else {
                continue;
            };
            let settings = self.settings_mut(id);
            if settings.key().is_none() {
                settings.api_key = lookup(var).filter(|v| !v.trim().is_empty());
            }
        }
        self
    }

    /// Settings for `id`.
    pub fn settings(&self, id: ProviderId) -> &ProviderSettings {
        match id {
            ProviderId::Gemini => &self.gemini,
            ProviderId::Groq => &self.groq,
            ProviderId::Cohere => &self.cohere,
            ProviderId::HuggingFace => &self.huggingface,
            ProviderId::Wikipedia => &self.wikipedia,
            ProviderId::ChatGpt => &self.chatgpt,
            ProviderId::Claude => &self.claude,
        }
    }

    fn settings_mut(&mut self, id: ProviderId) -> &mut ProviderSettings {
        match id {
            ProviderId::Gemini => &mut self.gemini,
            ProviderId::Groq => &mut self.groq,
            ProviderId::Cohere => &mut self.cohere,
            ProviderId::HuggingFace => &mut self.huggingface,
            ProviderId::Wikipedia => &mut self.wikipedia,
            ProviderId::ChatGpt => &mut self.chatgpt,
            ProviderId::Claude => &mut self.claude,
        }
    }

    /// API host for `id`, without a trailing slash.
    pub fn base_url(&self, id: ProviderId) -> String {
        let url = self.settings(id).base_url.as_deref().unwrap_or(match id {
            ProviderId::Gemini => "https://generativelanguage.googleapis.com",
            ProviderId::Groq => "https://api.groq.com/openai",
            ProviderId::Cohere => "https://api.cohere.ai",
            ProviderId::HuggingFace => "https://api-inference.huggingface.co",
            ProviderId::Wikipedia => "https://en.wikipedia.org",
            ProviderId::ChatGpt => "https://api.openai.com",
            ProviderId::Claude => "https://api.anthropic.com",
        });
        url.trim_end_matches('/').to_string()
    }

    /// Model name for `id`. Wikipedia has none.
    pub fn model(&self, id: ProviderId) -> String {
        let model = self.settings(id).model.as_deref().unwrap_or(match id {
            ProviderId::Gemini => "gemini-1.5-flash",
            ProviderId::Groq => "llama-3.1-8b-instant",
            ProviderId::Cohere => "command-r-lite",
            ProviderId::HuggingFace => "mistralai/Mistral-7B-Instruct-v0.2",
            ProviderId::Wikipedia => "",
            ProviderId::ChatGpt => "gpt-3.5-turbo",
            ProviderId::Claude => "claude-3-haiku-20240307",
        });
        model.to_string()
    }

    /// The credential for `id`, if configured.
    pub fn api_key(&self, id: ProviderId) -> Option<String> {
        self.settings(id).key().map(str::to_string)
    }

    /// Per-call deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
