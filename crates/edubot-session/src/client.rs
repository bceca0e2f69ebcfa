use crate::api::ChatApi;
use crate::health::{self, HealthState};
use crate::store::{TranscriptStore, STORAGE_KEY};
use edubot_core::{api_history, ChatRequest, EdubotError, EdubotResult, Message, Mode, Role};
use edubot_knowledge::KnowledgeBase;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Provider tag on answers produced locally.
pub const DEMO_PROVIDER: &str = "demo";

/// Starter questions shown when the server has none to offer.
pub const PROMPT_FALLBACK: [&str; 5] = [
    "Summarize Newton's three laws with examples",
    "Explain recursion to a beginner coder",
    "Create a 3-day revision plan for algebra",
    "How does photosynthesis keep ecosystems alive?",
    "Debug: why is my JavaScript loop freezing?",
];

/// Session tuning.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Delay between background health probes.
    pub poll_interval: Duration,
    /// Key the transcript is persisted under.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(12),
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

/// Where answers come from.
#[derive(Clone)]
pub enum SessionMode {
    /// Ask the EduBot server, falling back locally on failure.
    Networked(Arc<dyn ChatApi>),
    /// Never touch the network; every answer is local.
    Standalone,
}

impl std::fmt::Debug for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Networked(_) => f.write_str("Networked"),
            Self::Standalone => f.write_str("Standalone"),
        }
    }
}

/// Holds the in-flight flag for the duration of one ask.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// One chat session: transcript, persistence, connectivity and the
/// single-ask-at-a-time rule.
///
/// Create with [`SessionClient::create`] and stop with
/// [`SessionClient::dispose`]; dropping the session also stops its poll task.
pub struct SessionClient {
    config: SessionConfig,
    store: Arc<dyn TranscriptStore>,
    mode: SessionMode,
    transcript: Mutex<Vec<Message>>,
    /// Serializes snapshot-and-save so saves land in mutation order.
    persist_guard: tokio::sync::Mutex<()>,
    health: Arc<HealthState>,
    poller: Mutex<Option<JoinHandle<()>>>,
    in_flight: AtomicBool,
    knowledge: &'static KnowledgeBase,
}

impl SessionClient {
    /// Opens a session.
    ///
    /// Restores the transcript from `store`; when nothing usable is stored,
    /// seeds the welcome message and saves it. In networked mode the health
    /// poll starts right away.
    pub async fn create(
        config: SessionConfig,
        store: Arc<dyn TranscriptStore>,
        mode: SessionMode,
    ) -> Self {
        let health = Arc::new(match mode {
            SessionMode::Networked(_) => HealthState::networked(),
            SessionMode::Standalone => HealthState::standalone(),
        });

        let client = Self {
            config,
            store,
            mode,
            transcript: Mutex::new(Vec::new()),
            persist_guard: tokio::sync::Mutex::new(()),
            health,
            poller: Mutex::new(None),
            in_flight: AtomicBool::new(false),
            knowledge: KnowledgeBase::builtin(),
        };

        client.hydrate().await;

        if let SessionMode::Networked(api) = &client.mode {
            let handle = health::spawn_poller(
                Arc::clone(api),
                Arc::clone(&client.health),
                client.config.poll_interval,
            );
            *client.poller.lock() = Some(handle);
        }

        client
    }

    async fn hydrate(&self) {
        let restored = match self.store.load(&self.config.storage_key).await {
            Ok(Some(data)) => match serde_json::from_str::<Vec<Message>>(&data) {
                Ok(messages) => messages,
                Err(e) => {
                    warn!(error = %e, "Unable to parse saved history");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Unable to load saved history");
                Vec::new()
            }
        };

        if restored.is_empty() {
            *self.transcript.lock() = vec![Message::welcome()];
            self.persist().await;
        } else {
            info!(messages = restored.len(), "Restored chat history");
            *self.transcript.lock() = restored;
        }
    }

    /// Saves the transcript. Failures are logged, not returned.
    ///
    /// The snapshot is taken under the persist guard, so the last save to
    /// finish always carries the newest transcript.
    async fn persist(&self) {
        let _guard = self.persist_guard.lock().await;
        let snapshot = serde_json::to_string(&*self.transcript.lock());
        let result = match snapshot {
            Ok(json) => self.store.save(&self.config.storage_key, &json).await,
            Err(e) => Err(EdubotError::from(e)),
        };
        if let Err(e) = result {
            warn!(error = %e, "Unable to save history");
        }
    }

    /// Asks a question and returns the assistant's reply.
    ///
    /// Rejects blank text with [`EdubotError::EmptyQuestion`] and a second
    /// concurrent ask with [`EdubotError::Busy`]; neither touches the
    /// transcript. Server failures never surface: the reply then comes from
    /// the local knowledge base, tagged `demo`/`mock`.
    pub async fn submit_question(&self, text: &str, model: &str) -> EdubotResult<Message> {
        let question = text.trim();
        if question.is_empty() {
            return Err(EdubotError::EmptyQuestion);
        }
        let _in_flight = InFlight::acquire(&self.in_flight).ok_or(EdubotError::Busy)?;

        let history = {
            let mut transcript = self.transcript.lock();
            transcript.push(Message::user(question));
            api_history(&transcript)
        };
        self.persist().await;

        let reply = match &self.mode {
            SessionMode::Networked(api) => {
                let request = ChatRequest {
                    question: question.to_string(),
                    model: model.to_string(),
                    history,
                };
                match api.ask(&request).await {
                    Ok(resp) => {
                        self.health.set_online(true);
                        Message::assistant(resp.answer, resp.provider, resp.mode)
                    }
                    Err(e) => {
                        warn!(error = %e, "Ask failed, answering locally");
                        self.health.set_online(false);
                        self.local_answer(question)
                    }
                }
            }
            SessionMode::Standalone => self.local_answer(question),
        };

        self.transcript.lock().push(reply.clone());
        self.persist().await;
        Ok(reply)
    }

    fn local_answer(&self, question: &str) -> Message {
        Message::assistant(self.knowledge.answer(question), DEMO_PROVIDER, Mode::Mock)
    }

    /// Replaces the transcript with a fresh welcome message.
    pub async fn reset_transcript(&self) {
        *self.transcript.lock() = vec![Message::welcome()];
        self.persist().await;
    }

    /// Probes the server once and updates the connectivity flag.
    pub async fn poll_health(&self) {
        if let SessionMode::Networked(api) = &self.mode {
            health::poll_once(api.as_ref(), &self.health).await;
        }
    }

    /// Starter questions from the server, or [`PROMPT_FALLBACK`].
    pub async fn load_prompts(&self) -> Vec<String> {
        if let SessionMode::Networked(api) = &self.mode {
            match api.prompts().await {
                Ok(prompts) if !prompts.is_empty() => return prompts,
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Unable to load prompts"),
            }
        }
        PROMPT_FALLBACK.iter().map(|p| (*p).to_string()).collect()
    }

    /// Content of the most recent assistant message.
    pub fn latest_answer(&self) -> Option<String> {
        self.transcript
            .lock()
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.content.clone())
    }

    /// Plain-text transcript: `ROLE: content` blocks separated by blank lines.
    pub fn export_text(&self) -> String {
        self.transcript
            .lock()
            .iter()
            .map(|m| format!("{}: {}", m.role.as_str().to_uppercase(), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<Message> {
        self.transcript.lock().clone()
    }

    /// Connectivity state.
    pub fn health(&self) -> &HealthState {
        &self.health
    }

    /// Whether an ask is currently waiting for its answer.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Stops background polling and marks the session offline.
    pub fn dispose(&self) {
        if let Some(handle) = self.poller.lock().take() {
            handle.abort();
        }
        self.health.set_online(false);
    }
}

impl Drop for SessionClient {
    fn drop(&mut self) {
        if let Some(handle) = self.poller.get_mut().take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("mode", &self.mode)
            .field("messages", &self.transcript.lock().len())
            .field("online", &self.health.is_online())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_guard_releases_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = InFlight::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::SeqCst));
            assert!(InFlight::acquire(&flag).is_none());
        }
        assert!(!flag.load(Ordering::SeqCst));
        assert!(InFlight::acquire(&flag).is_some());
    }
}
