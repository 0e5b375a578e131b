//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::AccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::with_token_gate;

/// Create the Auth router for any repository implementation
///
/// `/login` and `/register` are public; every `/account` route is gated.
pub fn auth_router<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/register", post(handlers::register::<R>))
        .route(
            "/account",
            with_token_gate(
                get(handlers::list_accounts::<R>).post(handlers::register::<R>),
                &config,
            ),
        )
        .route(
            "/account/{id}",
            with_token_gate(
                get(handlers::get_account::<R>)
                    .put(handlers::update_account::<R>)
                    .delete(handlers::delete_account::<R>),
                &config,
            ),
        )
        .with_state(state)
}
