//! Core types and error definitions for EduBot.
//!
//! This crate provides the foundational types shared across all EduBot crates:
//! the unified error enum, transcript messages, provider identifiers and the
//! JSON shapes exchanged between the session client and the gateway.
//!
//! # Main types
//!
//! - [`EdubotError`] — Unified error enum for all EduBot subsystems.
//! - [`EdubotResult`] — Convenience alias for `Result<T, EdubotError>`.
//! - [`Message`] — A single transcript entry.
//! - [`ProviderId`] — The model identifiers the resolver recognises.
//! - [`ProviderRequest`] / [`ProviderResponse`] — Resolver input and output.
//! - [`HistoryTurn`] — A role/content pair forwarded upstream as context.

/// Error types.
pub mod error;
/// Conversation history normalisation.
pub mod history;
/// Transcript messages.
pub mod message;
/// Provider identifiers, requests and responses.
pub mod provider;
/// HTTP payloads shared by the gateway and its clients.
pub mod wire;

pub use error::{EdubotError, EdubotResult};
pub use history::{api_history, normalize_history, HistoryTurn};
pub use message::{Message, Mode, Role, WELCOME_TEXT};
pub use provider::{
    CostTier, ProviderId, ProviderRequest, ProviderResponse, INVALID_MODEL, MISSING_QUESTION,
};
pub use wire::{ChatRequest, ErrorBody, HealthReport, PromptList};
