//! HTTP front end for EduBot.
//!
//! [`GatewayServer::build`] returns an axum [`Router`](axum::Router) with
//! three endpoints: `POST /api/chat` runs the provider resolver,
//! `GET /health` reports which providers are configured and
//! `GET /api/prompts` lists starter questions.

pub mod error;
pub mod middleware;
pub mod server;

pub use error::{ApiError, PROXY_FAILURE_PREFIX};
pub use server::{AppState, GatewayServer, MAX_BODY_BYTES, SERVER_PROMPTS};
