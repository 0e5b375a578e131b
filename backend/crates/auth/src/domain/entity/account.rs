//! Account Entity
//!
//! A system user. The password is kept only as an Argon2id hash and never
//! leaves the crate in a response body.

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use platform::password::HashedPassword;

/// Stored account (`sys_account` row)
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub phone: String,
    /// Login handle, unique across accounts
    pub username: String,
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// Account about to be inserted
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub phone: String,
    pub username: String,
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Stamp with the current UTC time
    pub fn new(name: String, phone: String, username: String, password: HashedPassword) -> Self {
        Self {
            name,
            phone,
            username,
            password,
            created_at: Utc::now(),
        }
    }

    /// Attach the id assigned by the store
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            phone: self.phone,
            username: self.username,
            password: self.password,
            created_at: self.created_at,
        }
    }
}

/// Full replacement of an account's mutable fields
///
/// `id`, `username` and `created_at` are never touched by an update.
#[derive(Debug, Clone)]
pub struct AccountChanges {
    pub name: String,
    pub phone: String,
    pub password: HashedPassword,
}
