//! Sales Router

use std::sync::Arc;

use auth::{AuthConfig, with_token_gate};
use axum::{Router, routing::get};

use crate::domain::repository::{CustomerRepository, OrderRepository};
use crate::presentation::handlers::{self, SalesAppState};

/// Create the Sales router for any repository implementation
///
/// Every customer and order route requires a valid access token.
pub fn sales_router<R>(repo: R, config: Arc<AuthConfig>) -> Router
where
    R: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    let state = SalesAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/customer",
            with_token_gate(
                get(handlers::list_customers::<R>).post(handlers::create_customer::<R>),
                &config,
            ),
        )
        .route(
            "/customer/{id}",
            with_token_gate(
                get(handlers::get_customer::<R>)
                    .put(handlers::update_customer::<R>)
                    .delete(handlers::delete_customer::<R>),
                &config,
            ),
        )
        .route(
            "/order",
            with_token_gate(
                get(handlers::list_orders::<R>).post(handlers::create_order::<R>),
                &config,
            ),
        )
        .route(
            "/order/{id}",
            with_token_gate(
                get(handlers::get_order::<R>)
                    .put(handlers::update_order::<R>)
                    .delete(handlers::delete_order::<R>),
                &config,
            ),
        )
        .with_state(state)
}
