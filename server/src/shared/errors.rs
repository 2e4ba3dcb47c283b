use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::modules::chat::{ApplicationError, LLMError, RepositoryError};
use crate::modules::config::ConfigError;
use crate::modules::quiz::QuizError;
use crate::modules::research::BibliographyError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Generation cancelled")]
    Cancelled,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Cancelled => StatusCode::CONFLICT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_)
            | AppError::Storage(_)
            | AppError::IoError(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "Request failed: {}", self);
        }

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ApplicationError> for AppError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::ValidationError(msg) => AppError::Validation(msg),
            ApplicationError::LLMError(e) => e.into(),
            ApplicationError::RepositoryError(e) => e.into(),
            ApplicationError::Cancelled => AppError::Cancelled,
            ApplicationError::InternalError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<LLMError> for AppError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Cancelled => AppError::Cancelled,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => AppError::NotFound(what),
            other => AppError::Storage(other.to_string()),
        }
    }
}

impl From<BibliographyError> for AppError {
    fn from(err: BibliographyError) -> Self {
        match err {
            BibliographyError::InvalidArgument(msg) => AppError::Validation(msg),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(ApplicationError::ValidationError("empty".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ApplicationError::Cancelled).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(ApplicationError::LLMError(LLMError::NetworkError("down".into())))
                .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(BibliographyError::UpstreamError {
                status: 503,
                message: "busy".into()
            })
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::from(BibliographyError::InvalidArgument("empty".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(RepositoryError::StorageError("lock".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
