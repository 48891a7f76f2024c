//! API error handling for the Ladle Web API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unauthorized (401).
    Unauthorized,
    /// Uniqueness conflict; reported with status 422 like validation errors.
    Conflict,
    /// Unprocessable entity (422).
    UnprocessableEntity,
    /// Internal server error (500).
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Conflict => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub message: String,
}

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Create an unprocessable entity error.
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnprocessableEntity, message)
    }

    /// Create an internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        let body = ErrorBody {
            message: self.message,
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<crate::LadleError> for ApiError {
    fn from(err: crate::LadleError) -> Self {
        match &err {
            crate::LadleError::Auth(msg) => ApiError::unauthorized(msg.clone()),
            crate::LadleError::Validation(msg) => ApiError::unprocessable(msg.clone()),
            crate::LadleError::Conflict(msg) => ApiError::conflict(msg.clone()),
            _ => {
                tracing::error!("Internal error: {}", err);
                ApiError::internal("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status() {
        assert_eq!(
            ErrorCode::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::Conflict.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::UnprocessableEntity.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::InternalError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_constructors() {
        let err = ApiError::unauthorized("unauth");
        assert_eq!(err.code(), ErrorCode::Unauthorized);

        let err = ApiError::conflict("dup");
        assert_eq!(err.code(), ErrorCode::Conflict);

        let err = ApiError::unprocessable("invalid");
        assert_eq!(err.code(), ErrorCode::UnprocessableEntity);

        let err = ApiError::internal("error");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_from_ladle_error() {
        let err: ApiError = crate::LadleError::Auth("Unauthorized.".to_string()).into();
        assert_eq!(err.code(), ErrorCode::Unauthorized);

        let err: ApiError = crate::LadleError::Validation("title is required".to_string()).into();
        assert_eq!(err.code(), ErrorCode::UnprocessableEntity);

        let err: ApiError =
            crate::LadleError::Conflict("username already exists".to_string()).into();
        assert_eq!(err.code(), ErrorCode::Conflict);

        let err: ApiError = crate::LadleError::Database("boom".to_string()).into();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
