//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::entity::account::Account;

// ============================================================================
// Requests
// ============================================================================
//
// Missing fields decode as empty strings; the column constraints are the
// only validation applied.

/// Register / create account request
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Update account request (any `id` in the body is ignored)
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateAccountRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Account as returned to clients; the password hash is never included
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountResponse {
    #[schema(value_type = i32)]
    pub id: AccountId,
    pub name: String,
    pub phone: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            phone: account.phone,
            username: account.username,
            created_at: account.created_at,
        }
    }
}

/// Login response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(value_type = i32)]
    pub id: AccountId,
    pub name: String,
    pub username: String,
    pub phone: String,
    pub token: String,
}

/// `{"updated account": id}`
pub fn account_updated(id: AccountId) -> Value {
    json!({ "updated account": id })
}

/// `{"deleted account": id}`
pub fn account_deleted(id: AccountId) -> Value {
    json!({ "deleted account": id })
}
