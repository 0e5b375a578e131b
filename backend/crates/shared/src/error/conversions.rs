//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Map a PostgreSQL SQLSTATE to an error kind.
///
/// Returns `None` for codes the caller cannot act on.
/// https://www.postgresql.org/docs/current/errcodes-appendix.html
#[cfg(feature = "sqlx")]
fn classify_sqlstate(code: &str) -> Option<ErrorKind> {
    match code {
        // Class 23: integrity constraint violation
        "23000" | "23001" | "23503" | "23505" => Some(ErrorKind::Conflict),
        "23502" | "23514" => Some(ErrorKind::BadRequest),
        // Class 22: data exception (value too long, out of range, ...)
        "22001" | "22003" | "22P02" => Some(ErrorKind::BadRequest),
        // Class 53 / 57: resources exhausted, operator intervention
        "53000" | "53100" | "53200" | "53300" | "57000" | "57014" | "57P01" | "57P02"
        | "57P03" => Some(ErrorKind::ServiceUnavailable),
        _ => None,
    }
}

/// Error kind a `sqlx::Error` maps to
///
/// Feature crates that keep `sqlx::Error` in their own error enums use this
/// to report the same status code the [`AppError`] conversion would.
#[cfg(feature = "sqlx")]
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        sqlx::Error::Database(db_err) => db_err
            .code()
            .and_then(|code| classify_sqlstate(code.as_ref()))
            .unwrap_or(ErrorKind::InternalServerError),
        _ => ErrorKind::InternalServerError,
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let kind = sqlx_error_kind(&err);
        let message = match (&err, kind) {
            (sqlx::Error::RowNotFound, _) => "Record not found".to_string(),
            // The constraint message tells the caller what to fix
            (sqlx::Error::Database(db_err), ErrorKind::Conflict | ErrorKind::BadRequest) => {
                db_err.message().to_string()
            }
            (_, ErrorKind::ServiceUnavailable) => "Database unavailable".to_string(),
            _ => "Database error".to_string(),
        };
        AppError::new(kind, message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
mod axum_impls {
    use axum::Json;
    use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
    use axum::response::{IntoResponse, Response};

    use super::AppError;
    use crate::error::app_error::ErrorBody;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let body = ErrorBody {
                error: self.message().to_string(),
            };
            (self.kind().http_status(), Json(body)).into_response()
        }
    }

    impl From<JsonRejection> for AppError {
        fn from(rejection: JsonRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl From<QueryRejection> for AppError {
        fn from(rejection: QueryRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }

    impl From<PathRejection> for AppError {
        fn from(rejection: PathRejection) -> Self {
            AppError::bad_request(rejection.body_text())
        }
    }
}
