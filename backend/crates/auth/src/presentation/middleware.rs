//! Auth Middleware
//!
//! Token gate for protected routes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::{self as axum_middleware, Next};
use axum::response::Response;
use axum::routing::MethodRouter;
use platform::header::extract_header;

use crate::application::CheckTokenUseCase;
use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Identity behind a validated token, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub username: String,
}

/// Middleware that requires a valid access token
///
/// A missing, malformed, tampered or expired token is answered with
/// 403 `{"error":"Permission denied"}` and the inner handler never runs.
pub async fn require_token(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request<Body>,
    next: Next,
) -> AuthResult<Response> {
    let token =
        extract_header(req.headers(), &config.token_header).ok_or(AuthError::PermissionDenied)?;

    let claims = CheckTokenUseCase::new(config).execute(&token)?;

    tracing::debug!(username = %claims.account_username, "Token accepted");

    req.extensions_mut().insert(AuthenticatedAccount {
        username: claims.account_username,
    });

    Ok(next.run(req).await)
}

/// Put the registered methods of `route` behind [`require_token`]
///
/// Layered on the method router rather than the `Router`, so an
/// unsupported method still answers 405 without a token.
pub fn with_token_gate<S>(route: MethodRouter<S>, config: &Arc<AuthConfig>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    route.route_layer(axum_middleware::from_fn_with_state(
        config.clone(),
        require_token,
    ))
}
