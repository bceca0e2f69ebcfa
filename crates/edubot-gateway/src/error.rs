use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use edubot_core::{EdubotError, ErrorBody};
use tracing::error;

/// Prefix on every 500 response body.
pub const PROXY_FAILURE_PREFIX: &str = "AI proxy failed. ";

/// An [`EdubotError`] on its way out as an HTTP response.
///
/// Invalid requests become 400 with the validation message; everything else
/// becomes 500 with the message prefixed by [`PROXY_FAILURE_PREFIX`].
#[derive(Debug)]
pub struct ApiError(pub EdubotError);

impl From<EdubotError> for ApiError {
    fn from(err: EdubotError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        if self.0.is_invalid_request() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::BAD_REQUEST {
            self.0.detail()
        } else {
            error!(error = %self.0, "AI proxy error");
            format!("{PROXY_FAILURE_PREFIX}{}", self.0.detail())
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
