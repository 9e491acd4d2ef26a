use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("Invalid email or password.")]
    UnauthenticatedError,
    #[error("{0}")]
    ForbiddenOperation(String),
    // sqlx::Errorを引数にするヴァリアントが複数あるので[from]ではなく[source]を使う
    #[error("Transaction failed: {0}")]
    TransactionError(#[source] sqlx::Error),
    #[error("Database operation failed: {0}")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("Blocking task failed: {0}")]
    BlockingTaskError(#[from] tokio::task::JoinError),
    #[error("{0}")]
    ConversionEntityError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::ValidationError(_)
            | AppError::InvalidInput(_)
            | AppError::ConvertToUuidError(_)
            | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::BcryptError(_)
            | AppError::BlockingTaskError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
