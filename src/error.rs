use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use wsid_suggestion::SuggestionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Command(#[from] wsid_shared::Error),

    #[error(transparent)]
    Suggestion(#[from] SuggestionError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

impl AppError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            AppError::Command(wsid_shared::Error::Validate(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string())
            }
            AppError::Command(wsid_shared::Error::User(msg)) => (StatusCode::BAD_REQUEST, msg),
            AppError::Command(wsid_shared::Error::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, msg)
            }
            AppError::Command(err @ wsid_shared::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            AppError::Command(wsid_shared::Error::Server(msg)) => {
                tracing::error!("Server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Command(wsid_shared::Error::Unknown(e)) => {
                tracing::error!("Unexpected error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
            AppError::Suggestion(err @ SuggestionError::InvalidCandidateCount { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Suggestion(err @ SuggestionError::InsufficientCandidates { .. }) => {
                tracing::error!("Suggestion pipeline failed: {}", err);
                (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let error = status.canonical_reason().unwrap_or("Error");

        (status, Json(json!({ "error": error, "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<AppError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(wsid_shared::Error::User("Email already exists".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(wsid_shared::Error::Unauthorized("nope".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(wsid_shared::Error::NotFound("drink".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(SuggestionError::InvalidCandidateCount {
                requested: 0,
                max: 20
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(SuggestionError::InsufficientCandidates { requested: 6 }),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(anyhow::anyhow!("disk on fire")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_errors_do_not_leak() {
        let response = AppError::from(anyhow::anyhow!("secret table name")).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }
}
