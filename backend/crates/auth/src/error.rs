//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::sqlx_error_kind;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::AccountId;
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Account with id [{0}] not found")]
    AccountNotFound(AccountId),

    #[error("Account with username [{0}] not found")]
    UsernameNotFound(String),

    /// Password did not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token missing, malformed, tampered or expired
    #[error("Permission denied")]
    PermissionDenied,

    /// Password rejected before hashing
    #[error(transparent)]
    PasswordPolicy(#[from] PasswordPolicyError),

    #[error(transparent)]
    PasswordHash(#[from] PasswordHashError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Request-level validation (ids, pagination parameters)
    #[error(transparent)]
    Request(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        self.kind().http_status()
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AccountNotFound(_) | AuthError::UsernameNotFound(_) => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::PermissionDenied => ErrorKind::Forbidden,
            AuthError::PasswordPolicy(_) => ErrorKind::BadRequest,
            AuthError::Request(err) => err.kind(),
            AuthError::Database(err) => sqlx_error_kind(err),
            AuthError::PasswordHash(_) | AuthError::Token(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(err) => AppError::from(err),
            AuthError::Request(err) => err,
            // Internal details stay in the logs
            AuthError::PasswordHash(_) | AuthError::Token(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing failed");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::PermissionDenied => {
                tracing::warn!("Request rejected by token gate");
            }
            AuthError::Request(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Auth request failed");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("blocking task failed: {err}"))
    }
}
