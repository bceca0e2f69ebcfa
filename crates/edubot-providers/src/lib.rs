//! Upstream AI providers and the answer fallback resolver for EduBot.
//!
//! Every answer source implements [`AnswerProvider`]. The
//! [`ProviderResolver`] calls the requested provider when it is configured,
//! tries an encyclopedia lookup for factual questions, and otherwise answers
//! from the offline knowledge base.
//!
//! # Main types
//!
//! - [`AnswerProvider`] — Trait every upstream backend implements.
//! - [`ProviderResolver`] — Picks the answer source for a request.
//! - [`ProvidersConfig`] — Credentials, hosts, models and the call deadline.

/// Provider backends (Gemini, Groq, Cohere, Hugging Face, Wikipedia, OpenAI, Claude).
pub mod backends;
/// Provider configuration.
pub mod config;
/// Shared HTTP helpers.
pub mod http;
/// The fallback resolver.
pub mod resolver;

pub use backends::{default_providers, AnswerProvider};
pub use config::{ProviderSettings, ProvidersConfig};
pub use http::{extract_error_message, NO_ANSWER};
pub use resolver::ProviderResolver;
