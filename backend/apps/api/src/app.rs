//! Application router assembly

use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::AccountRepository;
use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::get,
};
use kernel::error::app_error::AppError;
use sales::domain::repository::{CustomerRepository, OrderRepository};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::openapi::openapi_json;

/// Full HTTP surface: auth, accounts, customers, orders and the API document
///
/// Every account, customer and order route sits behind the token gate;
/// `/login`, `/register` and `/api-docs/openapi.json` do not.
pub fn app<A, S>(accounts: A, sales: S, config: Arc<AuthConfig>) -> Router
where
    A: AccountRepository + Send + Sync + 'static,
    S: CustomerRepository + OrderRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(auth::auth_router(accounts, config.clone()))
        .merge(sales::sales_router(sales, config))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(|| async { AppError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            HeaderName::from_static(auth::application::config::TOKEN_HEADER),
            header::CONTENT_TYPE,
        ]))
}
