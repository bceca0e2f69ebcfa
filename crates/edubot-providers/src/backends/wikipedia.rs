use super::AnswerProvider;
use crate::config::ProvidersConfig;
use crate::http;
use async_trait::async_trait;
use edubot_core::{EdubotError, EdubotResult, HistoryTurn, ProviderId};
use regex::Regex;
use reqwest::Url;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::debug;

/// Wikipedia REST page-summary lookup.
///
/// Needs no credential, so it is always configured. A missing page or a
/// summary without an extract is "no answer", not an error.
pub struct WikipediaBackend {
    base_url: String,
    http: reqwest::Client,
}

impl WikipediaBackend {
    /// Creates the backend from `config`.
    pub fn new(config: &ProvidersConfig, http: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url(ProviderId::Wikipedia),
            http,
        }
    }

    fn summary_url(&self, term: &str) -> EdubotResult<Url> {
        let bad_base = || {
            EdubotError::provider(
                ProviderId::Wikipedia.as_str(),
                format!("invalid Wikipedia base URL: {}", self.base_url),
            )
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| bad_base())?;
        url.path_segments_mut()
            .map_err(|()| bad_base())?
            .pop_if_empty()
            .extend(["api", "rest_v1", "page", "summary", term]);
        Ok(url)
    }
}

#[allow(clippy::expect_used)]
fn lead_in_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)what is |who is |explain |tell me about ").expect("literal pattern")
    })
}

/// Strips conversational lead-ins so the rest can be used as a page title.
pub fn search_term(question: &str) -> String {
    lead_in_pattern()
        .replace_all(question, "")
        .trim()
        .to_string()
}

#[async_trait]
impl AnswerProvider for WikipediaBackend {
    fn id(&self) -> ProviderId {
        ProviderId::Wikipedia
    }

    fn is_configured(&self) -> bool {
        true
    }

    async fn invoke(
        &self,
        question: &str,
        _history: &[HistoryTurn],
    ) -> EdubotResult<Option<String>> {
        let term = search_term(question);
        if term.is_empty() {
            return Ok(None);
        }
        let url = self.summary_url(&term)?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| http::transport_failure(ProviderId::Wikipedia, &e))?;

        if !resp.status().is_success() {
            debug!(status = %resp.status(), term = %term, "no Wikipedia summary");
            return Ok(None);
        }

        let body: Value = resp.json().await.map_err(|e| {
            EdubotError::provider(
                ProviderId::Wikipedia.as_str(),
                format!("Wikipedia returned an unreadable response: {e}"),
            )
        })?;

        Ok(body
            .get("extract")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|extract| format!("{extract}\n\nSource: Wikipedia")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_strips_lead_ins() {
        assert_eq!(search_term("What is photosynthesis"), "photosynthesis");
        assert_eq!(search_term("  WHO IS Ada Lovelace "), "Ada Lovelace");
        assert_eq!(search_term("tell me about the Moon"), "the Moon");
        assert_eq!(search_term("Explain gravity"), "gravity");
    }

    #[test]
    fn test_summary_url_encodes_term() {
        let backend = WikipediaBackend::new(
            &ProvidersConfig::default(),
            reqwest::Client::new(),
        );
        let url = backend.summary_url("Ada Lovelace?").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Ada%20Lovelace%3F"
        );
    }
}
