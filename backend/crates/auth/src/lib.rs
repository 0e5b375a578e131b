//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Account entity, token claims, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, token gate
//!
//! ## Features
//! - Account registration and login with username + password
//! - Bearer tokens (HS256 JWT) in the `X-JWT-TOKEN` header
//! - Account CRUD with paginated name search
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, input capped at 72 bytes
//! - Tokens expire after a configurable TTL (24 hours by default)
//! - Any valid token grants access to every gated route

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAccountRepository;
pub use presentation::middleware::{AuthenticatedAccount, require_token, with_token_gate};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;
