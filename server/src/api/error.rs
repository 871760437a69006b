//! API error type and its HTTP rendering.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gantry_common::HealthStateScope;
use thiserror::Error;

use crate::application::services::agents::AgentServiceError;
use crate::domain::{AgentUpdateError, OperationOutcome, OutcomeStatus};

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A domain rejection; rendered from its [`OperationOutcome`].
    #[error(transparent)]
    Rejected(#[from] AgentUpdateError),

    /// The request body could not be turned into a request.
    #[error("{0}")]
    InvalidBody(String),

    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl From<AgentServiceError> for ApiError {
    fn from(err: AgentServiceError) -> Self {
        match err {
            AgentServiceError::Rejected(rejection) => ApiError::Rejected(rejection),
            AgentServiceError::Persistence(source) => ApiError::Internal(source),
        }
    }
}

fn status_code(status: OutcomeStatus) -> StatusCode {
    match status {
        OutcomeStatus::Forbidden => StatusCode::FORBIDDEN,
        OutcomeStatus::NotFound => StatusCode::NOT_FOUND,
        OutcomeStatus::BadRequest => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, outcome) = match self {
            ApiError::Rejected(rejection) => {
                let outcome = rejection.outcome();
                (status_code(outcome.status), outcome)
            }
            ApiError::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                OperationOutcome::bad_request(message.clone(), message),
            ),
            ApiError::Internal(err) => {
                tracing::error!(error = %format!("{err:#}"), "request failed");
                let body = serde_json::json!({
                    "message": "Internal server error.",
                    "detail": "",
                    "scope": HealthStateScope::Global,
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };
        (status, Json(outcome)).into_response()
    }
}
