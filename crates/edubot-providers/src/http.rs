//! Request plumbing shared by the HTTP backends.

use edubot_core::{EdubotError, EdubotResult, ProviderId};
use serde_json::Value;
use std::time::Duration;

/// Answer text used when a successful response carries no answer.
pub const NO_ANSWER: &str = "No answer returned.";

/// Builds the HTTP client every backend shares.
pub fn client(timeout: Duration) -> EdubotResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| EdubotError::Config(format!("http client: {e}")))
}

/// Pulls a human-readable error out of a provider error body.
///
/// Looks at `error.message`, then an `error` string, then `message`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = value
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| value.get("message").and_then(Value::as_str))?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Sends `request` and returns the parsed JSON body of a 2xx response.
///
/// Transport errors, timeouts, non-2xx statuses and non-JSON bodies all
/// become [`EdubotError::ProviderFailure`] tagged with `id`.
pub async fn send_json(id: ProviderId, request: reqwest::RequestBuilder) -> EdubotResult<Value> {
    let resp = request.send().await.map_err(|e| transport_failure(id, &e))?;

    let status = resp.status();
    let body = resp.text().await.map_err(|e| transport_failure(id, &e))?;

    if !status.is_success() {
        let message = extract_error_message(&body).unwrap_or_else(|| status.to_string());
        return Err(EdubotError::provider(
            id.as_str(),
            format!("{} API error ({}): {message}", id.display_name(), status.as_u16()),
        ));
    }

    serde_json::from_str(&body).map_err(|e| {
        EdubotError::provider(
            id.as_str(),
            format!("{} returned an unreadable response: {e}", id.display_name()),
        )
    })
}

/// Reads the string at `pointer`, trimmed, or [`NO_ANSWER`].
pub fn answer_at(body: &Value, pointer: &str) -> String {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_ANSWER)
        .to_string()
}

pub(crate) fn transport_failure(id: ProviderId, err: &reqwest::Error) -> EdubotError {
    let message = if err.is_timeout() {
        format!("{} request timed out", id.display_name())
    } else {
        format!("{} request failed: {err}", id.display_name())
    };
    EdubotError::provider(id.as_str(), message)
}
