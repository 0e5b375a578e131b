//! Issue Token Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::entity::account::Account;
use crate::domain::value_object::access_claims::AccessClaims;
use crate::error::AuthResult;

/// Signs access tokens for authenticated accounts
pub struct IssueTokenUseCase {
    config: Arc<AuthConfig>,
}

impl IssueTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, account: &Account) -> AuthResult<String> {
        self.execute_at(account, Utc::now())
    }

    pub fn execute_at(&self, account: &Account, now: DateTime<Utc>) -> AuthResult<String> {
        let claims = AccessClaims::new(&account.username, now, self.config.token_ttl_chrono());
        Ok(self.config.signer().sign(&claims)?)
    }
}
