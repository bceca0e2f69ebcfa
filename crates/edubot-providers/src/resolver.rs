use crate::backends::{default_providers, AnswerProvider};
use crate::config::ProvidersConfig;
use edubot_core::{EdubotResult, ProviderId, ProviderRequest, ProviderResponse};
use edubot_knowledge::KnowledgeBase;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Question fragments that trigger an automatic encyclopedia lookup.
const FACTUAL_CUES: &[&str] = &["what is", "who is"];

/// Picks the answer source for each validated request.
///
/// Order of attempts:
/// 1. the requested provider, if it is configured;
/// 2. an automatic encyclopedia lookup for factual questions;
/// 3. the offline knowledge base, which always answers.
///
/// Errors from step 1 are returned to the caller. Errors from step 2 are
/// logged and swallowed. The resolver keeps no state between requests.
pub struct ProviderResolver {
    providers: Vec<Box<dyn AnswerProvider>>,
    knowledge: &'static KnowledgeBase,
}

impl ProviderResolver {
    /// Creates a resolver over `providers`, which must be in priority order.
    pub fn new(providers: Vec<Box<dyn AnswerProvider>>) -> Self {
        Self {
            providers,
            knowledge: KnowledgeBase::builtin(),
        }
    }

    /// Creates a resolver with every built-in backend.
    pub fn from_config(config: &ProvidersConfig) -> EdubotResult<Self> {
        Ok(Self::new(default_providers(config)?))
    }

    /// Uses `knowledge` instead of the built-in table.
    pub fn with_knowledge(mut self, knowledge: &'static KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Provider identifier → whether it is configured, for health reports.
    pub fn configured(&self) -> BTreeMap<String, bool> {
        ProviderId::ALL
            .into_iter()
            .map(|id| {
                let ready = self
                    .providers
                    .iter()
                    .any(|p| p.id() == id && p.is_configured());
                (id.as_str().to_string(), ready)
            })
            .collect()
    }

    /// Answers `request`.
    pub async fn resolve(&self, request: &ProviderRequest) -> EdubotResult<ProviderResponse> {
        let mut encyclopedia_tried = false;

        let requested = self
            .providers
            .iter()
            .find(|p| p.id() == request.model_id && p.is_configured());

        if let Some(provider) = requested {
            let id = provider.id();
            info!(provider = %id, "Invoking requested provider");
            match provider.invoke(&request.question, &request.history).await? {
                Some(answer) => return Ok(ProviderResponse::live(id, answer)),
                None => {
                    debug!(provider = %id, "Provider had no answer");
                    encyclopedia_tried = id.is_encyclopedia();
                }
            }
        }

        let lower = request.lowercase_question();
        if !encyclopedia_tried && FACTUAL_CUES.iter().any(|cue| lower.contains(cue)) {
            if let Some(answer) = self.auto_encyclopedia(&request.question).await {
                return Ok(ProviderResponse::encyclopedia(answer));
            }
        }

        info!(model = %request.model_id, "Answering from knowledge base");
        Ok(ProviderResponse::mock(
            request.model_id,
            self.knowledge.answer(&request.question),
        ))
    }

    async fn auto_encyclopedia(&self, question: &str) -> Option<String> {
        let provider = self
            .providers
            .iter()
            .find(|p| p.id().is_encyclopedia() && p.is_configured())?;
        match provider.invoke(question, &[]).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Encyclopedia lookup failed, falling back");
                None
            }
        }
    }
}

impl std::fmt::Debug for ProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<ProviderId> = self.providers.iter().map(|p| p.id()).collect();
        f.debug_struct("ProviderResolver")
            .field("providers", &ids)
            .finish_non_exhaustive()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use edubot_core::{EdubotError, HistoryTurn, Mode};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    type Reply = fn(&str) -> EdubotResult<Option<String>>;

    /// A mock provider that answers through a fixed function and counts calls.
    struct MockProvider {
        id: ProviderId,
        configured: bool,
        reply: Reply,
        call_count: Arc<AtomicU32>,
    }

    impl MockProvider {
        fn boxed(
            id: ProviderId,
            configured: bool,
            reply: Reply,
        ) -> (Box<dyn AnswerProvider>, Arc<AtomicU32>) {
            let calls = Arc::new(AtomicU32::new(0));
            let provider = Self {
                id,
                configured,
                reply,
                call_count: Arc::clone(&calls),
            };
            (Box::new(provider), calls)
        }
    }

    #[async_trait]
    impl AnswerProvider for MockProvider {
        fn id(&self) -> ProviderId {
            self.id
        }

        fn is_configured(&self) -> bool {
            self.configured
        }

        async fn invoke(
            &self,
            question: &str,
            _history: &[HistoryTurn],
        ) -> EdubotResult<Option<String>> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            (self.reply)(question)
        }
    }

    fn answered(q: &str) -> EdubotResult<Option<String>> {
        Ok(Some(format!("answer to {q}")))
    }

    fn nothing(_: &str) -> EdubotResult<Option<String>> {
        Ok(None)
    }

    fn failing(_: &str) -> EdubotResult<Option<String>> {
        Err(EdubotError::provider("mock", "boom"))
    }

    fn request(question: &str, model: &str) -> ProviderRequest {
        ProviderRequest::new(question, Some(model), Vec::new()).unwrap()
    }

    // ── Live provider ────────────────────────────────────────────────────

    #[tokio::test]
    async fn configured_provider_answers_live() {
        let (groq, calls) = MockProvider::boxed(ProviderId::Groq, true, answered);
        let resolver = ProviderResolver::new(vec![groq]);

        let resp = resolver.resolve(&request("Explain DNA", "groq")).await.unwrap();
        assert_eq!(resp.mode, Mode::Live);
        assert_eq!(resp.provider, "groq");
        assert_eq!(resp.answer, "answer to Explain DNA");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn only_the_requested_provider_is_called() {
        let (gemini, gemini_calls) = MockProvider::boxed(ProviderId::Gemini, true, answered);
        let (claude, claude_calls) = MockProvider::boxed(ProviderId::Claude, true, answered);
        let resolver = ProviderResolver::new(vec![gemini, claude]);

        let resp = resolver.resolve(&request("hi", "claude")).await.unwrap();
        assert_eq!(resp.provider, "claude");
        assert_eq!(gemini_calls.load(Ordering::SeqCst), 0);
        assert_eq!(claude_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn live_failure_is_returned_not_swallowed() {
        let (cohere, _) = MockProvider::boxed(ProviderId::Cohere, true, failing);
        let (wiki, wiki_calls) = MockProvider::boxed(ProviderId::Wikipedia, true, answered);
        let resolver = ProviderResolver::new(vec![cohere, wiki]);

        let err = resolver
            .resolve(&request("What is DNA?", "cohere"))
            .await
            .unwrap_err();
        assert!(matches!(err, EdubotError::ProviderFailure { .. }));
        assert_eq!(wiki_calls.load(Ordering::SeqCst), 0);
    }

    // ── Fall-through ─────────────────────────────────────────────────────

    #[tokio::test]
    async fn unconfigured_provider_falls_to_knowledge_base() {
        let (chatgpt, calls) = MockProvider::boxed(ProviderId::ChatGpt, false, answered);
        let resolver = ProviderResolver::new(vec![chatgpt]);

        let resp = resolver
            .resolve(&request("asdkjasd random gibberish", "chatgpt"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Mock);
        assert_eq!(resp.provider, "chatgpt");
        assert!(resp.cost.is_none());
        assert_eq!(resp.answer, edubot_knowledge::GENERAL_OVERVIEW);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn factual_question_gets_automatic_encyclopedia() {
        let (wiki, calls) = MockProvider::boxed(ProviderId::Wikipedia, true, answered);
        let resolver = ProviderResolver::new(vec![wiki]);

        let resp = resolver
            .resolve(&request("Who is Ada Lovelace?", "gemini"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Wikipedia);
        assert_eq!(resp.provider, "wikipedia");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn automatic_encyclopedia_errors_are_swallowed() {
        let (wiki, calls) = MockProvider::boxed(ProviderId::Wikipedia, true, failing);
        let resolver = ProviderResolver::new(vec![wiki]);

        let resp = resolver
            .resolve(&request("What is photosynthesis?", "groq"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Mock);
        assert_eq!(resp.provider, "groq");
        assert!(resp.answer.starts_with("Photosynthesis"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn explicit_encyclopedia_miss_is_not_retried() {
        let (wiki, calls) = MockProvider::boxed(ProviderId::Wikipedia, true, nothing);
        let resolver = ProviderResolver::new(vec![wiki]);

        let resp = resolver
            .resolve(&request("What is zxqv", "wikipedia"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Mock);
        assert_eq!(resp.provider, "wikipedia");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn explicit_encyclopedia_hit_is_live() {
        let (wiki, _) = MockProvider::boxed(ProviderId::Wikipedia, true, answered);
        let resolver = ProviderResolver::new(vec![wiki]);

        let resp = resolver
            .resolve(&request("Jupiter", "wikipedia"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Live);
        assert_eq!(resp.provider, "wikipedia");
    }

    #[tokio::test]
    async fn non_factual_question_skips_encyclopedia() {
        let (wiki, calls) = MockProvider::boxed(ProviderId::Wikipedia, true, answered);
        let resolver = ProviderResolver::new(vec![wiki]);

        let resp = resolver
            .resolve(&request("Explain Newton's laws", "cohere"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Mock);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn custom_knowledge_base_answers_fallback() {
        use edubot_knowledge::Entry;
        use std::sync::OnceLock;

        static ROBOTS: Entry = Entry {
            topic: "robots",
            keywords: &["robot"],
            answer: "Robots follow programs.",
        };
        static KB: OnceLock<KnowledgeBase> = OnceLock::new();
        let kb = KB.get_or_init(|| KnowledgeBase::new([&ROBOTS]));

        let resolver = ProviderResolver::new(Vec::new()).with_knowledge(kb);
        let resp = resolver
            .resolve(&request("Tell me about robots", "groq"))
            .await
            .unwrap();
        assert_eq!(resp.mode, Mode::Mock);
        assert_eq!(resp.answer, "Robots follow programs.");
    }

    // ── Health ───────────────────────────────────────────────────────────

    #[test]
    fn configured_map_lists_every_provider() {
        let (groq, _) = MockProvider::boxed(ProviderId::Groq, true, answered);
        let (claude, _) = MockProvider::boxed(ProviderId::Claude, false, answered);
        let resolver = ProviderResolver::new(vec![groq, claude]);

        let map = resolver.configured();
        assert_eq!(map.len(), ProviderId::ALL.len());
        assert!(map["groq"]);
        assert!(!map["claude"]);
        assert!(!map["wikipedia"]);
    }
}
