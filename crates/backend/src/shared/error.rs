use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::common::UseCaseError;
use thiserror::Error;

/// Ошибки шлюза
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream unreachable: {0}")]
    Upstream(String),

    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("Upstream timed out")]
    Timeout,

    #[error("Invalid upstream response: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_)
            | GatewayError::UpstreamStatus(_)
            | GatewayError::Decode(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    pub fn to_usecase_error(&self) -> UseCaseError {
        match self {
            GatewayError::BadRequest(msg) => UseCaseError::validation(msg.clone()),
            GatewayError::Timeout => UseCaseError::timeout(self.to_string()),
            _ => UseCaseError::external(self.to_string()),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            GatewayError::UpstreamStatus(status.as_u16())
        } else {
            GatewayError::Upstream(e.to_string())
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_usecase_error())).into_response()
    }
}
