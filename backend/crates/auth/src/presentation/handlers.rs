//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, State};
use kernel::error::app_error::ErrorBody;
use kernel::extract::{JsonBody, PathParam, QueryParams};
use kernel::id::AccountId;
use kernel::pagination::{ListQuery, ListResponse};
use serde_json::Value;

use crate::application::config::AuthConfig;
use crate::application::{
    ManageAccountUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase,
    UpdateAccountInput,
};
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AccountResponse, LoginRequest, LoginResponse, RegisterRequest, UpdateAccountRequest,
    account_deleted, account_updated,
};
use crate::presentation::middleware::AuthenticatedAccount;

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R>
where
    R: AccountRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Log in with username and password
///
/// The returned `token` goes into the `X-JWT-TOKEN` header of every other
/// request.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Unreadable body", body = ErrorBody),
        (status = 401, description = "Wrong password", body = ErrorBody),
        (status = 404, description = "Unknown username", body = ErrorBody)
    )
)]
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(SignInInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    let account = output.account;
    Ok(Json(LoginResponse {
        id: account.id,
        name: account.name,
        username: account.username,
        phone: account.phone,
        token: output.token,
    }))
}

/// Register an account
///
/// Served publicly as `POST /register` and behind the token gate as
/// `POST /account`.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Created account", body = AccountResponse),
        (status = 400, description = "Password longer than 72 bytes", body = ErrorBody),
        (status = 409, description = "Username taken", body = ErrorBody)
    )
)]
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let account = use_case
        .execute(RegisterInput {
            name: req.name,
            phone: req.phone,
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(account.into()))
}

// ============================================================================
// Accounts (gated)
// ============================================================================

/// List accounts, filtered by name
#[utoipa::path(
    get,
    path = "/account",
    tag = "account",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring of the name"),
        ("page" = Option<i64>, Query, description = "1-based page, default 1"),
        ("limit" = Option<i64>, Query, description = "Page size, default 10")
    ),
    responses(
        (status = 200, description = "One page of accounts", body = ListResponse<AccountResponse>),
        (status = 400, description = "Malformed page or limit", body = ErrorBody),
        (status = 403, description = "Missing or invalid token", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn list_accounts<R>(
    State(state): State<AuthAppState<R>>,
    QueryParams(query): QueryParams<ListQuery>,
) -> AuthResult<Json<ListResponse<AccountResponse>>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let (term, page) = query.parse()?;

    let accounts = ManageAccountUseCase::new(state.repo.clone())
        .list(term, page)
        .await?;

    Ok(Json(ListResponse::new(accounts.map(AccountResponse::from), page)))
}

/// Get one account
#[utoipa::path(
    get,
    path = "/account/{id}",
    tag = "account",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account", body = AccountResponse),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such account", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn get_account<R>(
    State(state): State<AuthAppState<R>>,
    PathParam(raw_id): PathParam<String>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let id = AccountId::parse(&raw_id)?;

    let account = ManageAccountUseCase::new(state.repo.clone()).get(id).await?;

    Ok(Json(account.into()))
}

/// Replace an account's name, phone and password
#[utoipa::path(
    put,
    path = "/account/{id}",
    tag = "account",
    params(("id" = i32, Path, description = "Account id")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Receipt: `{\"updated account\": id}`"),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such account", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn update_account<R>(
    State(state): State<AuthAppState<R>>,
    Extension(caller): Extension<AuthenticatedAccount>,
    PathParam(raw_id): PathParam<String>,
    JsonBody(req): JsonBody<UpdateAccountRequest>,
) -> AuthResult<Json<Value>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let id = AccountId::parse(&raw_id)?;
    tracing::debug!(account_id = %id, by = %caller.username, "Updating account");

    ManageAccountUseCase::new(state.repo.clone())
        .update(
            id,
            UpdateAccountInput {
                name: req.name,
                phone: req.phone,
                password: req.password,
            },
        )
        .await?;

    Ok(Json(account_updated(id)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/account/{id}",
    tag = "account",
    params(("id" = i32, Path, description = "Account id")),
    responses(
        (status = 200, description = "Receipt: `{\"deleted account\": id}`"),
        (status = 403, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such account", body = ErrorBody)
    ),
    security(("jwt_token" = []))
)]
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    Extension(caller): Extension<AuthenticatedAccount>,
    PathParam(raw_id): PathParam<String>,
) -> AuthResult<Json<Value>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let id = AccountId::parse(&raw_id)?;
    tracing::debug!(account_id = %id, by = %caller.username, "Deleting account");

    ManageAccountUseCase::new(state.repo.clone()).delete(id).await?;

    Ok(Json(account_deleted(id)))
}
