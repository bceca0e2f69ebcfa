//! Chat session client for EduBot.
//!
//! A [`SessionClient`] owns one conversation: it restores and persists the
//! transcript through a [`TranscriptStore`], talks to the EduBot server
//! through a [`ChatApi`], tracks connectivity in a [`HealthState`], and
//! answers from the offline knowledge base whenever the server cannot.

/// HTTP client for the EduBot server.
pub mod api;
/// The session object.
pub mod client;
/// Connectivity tracking and background polling.
pub mod health;
/// Transcript persistence.
pub mod store;

pub use api::{ChatApi, HttpChatApi};
pub use client::{SessionClient, SessionConfig, SessionMode, DEMO_PROVIDER, PROMPT_FALLBACK};
pub use health::HealthState;
pub use store::{FileTranscriptStore, MemoryTranscriptStore, TranscriptStore, STORAGE_KEY};
