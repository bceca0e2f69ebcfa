use crate::error::ApiError;
use crate::middleware::{cors_middleware, log_middleware};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    middleware as axum_mw,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use edubot_core::{ErrorBody, HealthReport, PromptList, ProviderId, ProviderRequest, ProviderResponse};
use edubot_providers::ProviderResolver;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Starter questions served by `GET /api/prompts`.
pub const SERVER_PROMPTS: [&str; 5] = [
    "Explain Newton's laws with real-life examples",
    "Summarize the water cycle for middle schoolers",
    "Help me debug a JavaScript array loop",
    "Create a study plan for world history exams",
    "Teach me binary search in plain English",
];

/// Shared application state.
pub struct AppState {
    /// Answers chat requests.
    pub resolver: Arc<ProviderResolver>,
    /// Served by `GET /api/prompts`.
    pub prompts: Vec<String>,
}

/// The EduBot HTTP server.
pub struct GatewayServer;

impl GatewayServer {
    /// Build the router with the built-in starter prompts.
    pub fn build(resolver: Arc<ProviderResolver>) -> Router {
        let prompts = SERVER_PROMPTS.iter().map(|p| (*p).to_string()).collect();
        Self::build_with_prompts(resolver, prompts)
    }

    /// Build the router serving `prompts` from `/api/prompts`.
    pub fn build_with_prompts(resolver: Arc<ProviderResolver>, prompts: Vec<String>) -> Router {
        let state = Arc::new(AppState { resolver, prompts });

        Router::new()
            .route("/api/chat", post(chat_handler))
            .route("/api/prompts", get(prompts_handler))
            .route("/health", get(health_handler))
            .fallback(not_found_handler)
            .with_state(state)
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(axum_mw::from_fn(cors_middleware))
            .layer(axum_mw::from_fn(log_middleware))
    }
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProviderResponse>, ApiError> {
    // Bodies that are not JSON are validated like an empty object.
    let value: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let request = ProviderRequest::from_json(&value)?;
    debug!(model = %request.model_id, turns = request.history.len(), "Chat request");
    let response = state.resolver.resolve(&request).await?;
    Ok(Json(response))
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        providers: state.resolver.configured(),
        free_tier: ProviderId::free_tier()
            .map(|id| id.as_str().to_string())
            .collect(),
    })
}

async fn prompts_handler(State(state): State<Arc<AppState>>) -> Json<PromptList> {
    Json(PromptList {
        prompts: state.prompts.clone(),
    })
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found.")))
}
