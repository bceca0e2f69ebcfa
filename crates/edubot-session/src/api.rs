use async_trait::async_trait;
use edubot_core::{ChatRequest, EdubotError, EdubotResult, ErrorBody, PromptList, ProviderResponse};
use std::time::Duration;

/// The three calls a session makes against the EduBot server.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// `POST /api/chat`.
    async fn ask(&self, request: &ChatRequest) -> EdubotResult<ProviderResponse>;
    /// `GET /health`. Any 2xx counts as healthy.
    async fn health(&self) -> EdubotResult<()>;
    /// `GET /api/prompts`.
    async fn prompts(&self) -> EdubotResult<Vec<String>>;
}

/// [`ChatApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpChatApi {
    /// Default per-request deadline.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> EdubotResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EdubotError::Config(format!("http client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Server root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn transport(e: reqwest::Error) -> EdubotError {
    EdubotError::Transport(e.to_string())
}

/// Turns a non-2xx response into an error carrying the server's `error`
/// field, or the status text when the body has none.
async fn error_from(resp: reqwest::Response) -> EdubotError {
    let status = resp.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("Unknown server error")
        .to_string();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => fallback,
    };
    EdubotError::Transport(message)
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn ask(&self, request: &ChatRequest) -> EdubotResult<ProviderResponse> {
        let resp = self
            .http
            .post(self.url("/api/chat"))
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        if !resp.status().is_success() {
            return Err(error_from(resp).await);
        }

        let body: ProviderResponse = resp.json().await.map_err(transport)?;
        if body.answer.trim().is_empty() {
            return Err(EdubotError::Transport(
                "Server returned an empty answer.".into(),
            ));
        }
        Ok(body)
    }

    async fn health(&self) -> EdubotResult<()> {
        let resp = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(EdubotError::Transport(format!(
                "Health check failed: {}",
                resp.status()
            )));
        }
        Ok(())
    }

    async fn prompts(&self) -> EdubotResult<Vec<String>> {
        let resp = self
            .http
            .get(self.url("/api/prompts"))
            .send()
            .await
            .map_err(transport)?;
        if !resp.status().is_success() {
            return Err(error_from(resp).await);
        }
        let body: PromptList = resp.json().await.map_err(transport)?;
        Ok(body.prompts)
    }
}
