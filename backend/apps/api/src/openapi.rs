//! OpenAPI document for every route the server exposes
//!
//! Served as JSON at `/api-docs/openapi.json`.

use axum::Json;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name the gated operations refer to in their `security` requirement
pub const TOKEN_SCHEME: &str = "jwt_token";

/// Registers the `X-JWT-TOKEN` header as an API key scheme
struct TokenHeader;

impl Modify for TokenHeader {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            TOKEN_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-JWT-TOKEN",
                "Token returned by POST /login",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales API",
        description = "Accounts, customers and orders. Every route except `/login` and `/register` needs an `X-JWT-TOKEN` header."
    ),
    paths(
        auth::presentation::handlers::login,
        auth::presentation::handlers::register,
        auth::presentation::handlers::list_accounts,
        auth::presentation::handlers::get_account,
        auth::presentation::handlers::update_account,
        auth::presentation::handlers::delete_account,
        sales::presentation::handlers::list_customers,
        sales::presentation::handlers::get_customer,
        sales::presentation::handlers::create_customer,
        sales::presentation::handlers::update_customer,
        sales::presentation::handlers::delete_customer,
        sales::presentation::handlers::list_orders,
        sales::presentation::handlers::get_order,
        sales::presentation::handlers::create_order,
        sales::presentation::handlers::update_order,
        sales::presentation::handlers::delete_order,
    ),
    components(schemas(kernel::error::app_error::ErrorBody)),
    modifiers(&TokenHeader),
    tags(
        (name = "auth", description = "Login and self-registration"),
        (name = "account", description = "Account management"),
        (name = "customer", description = "Customer management"),
        (name = "order", description = "Orders joined with their customer")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
