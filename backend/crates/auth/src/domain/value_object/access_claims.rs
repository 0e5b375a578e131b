//! Access Token Claims
//!
//! Payload of the bearer token issued at login:
//! `{"accountUsername": "...", "expiresAt": <unix secs>, "iat": <unix secs>}`

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    #[serde(rename = "accountUsername")]
    pub account_username: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
    #[serde(default)]
    pub iat: i64,
}

impl AccessClaims {
    pub fn new(account_username: impl Into<String>, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            account_username: account_username.into(),
            expires_at: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// A token is valid up to, but not including, its `expiresAt` second
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.expires_at
    }
}
