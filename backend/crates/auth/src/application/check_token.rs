//! Check Token Use Case
//!
//! Validates a presented access token. Every failure collapses into
//! [`AuthError::PermissionDenied`]; the reason is only logged.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AuthConfig;
use crate::domain::value_object::access_claims::AccessClaims;
use crate::error::{AuthError, AuthResult};

/// Check token use case
pub struct CheckTokenUseCase {
    config: Arc<AuthConfig>,
}

impl CheckTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, token: &str) -> AuthResult<AccessClaims> {
        self.execute_at(token, Utc::now())
    }

    pub fn execute_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<AccessClaims> {
        let claims: AccessClaims = self.config.signer().verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Token verification failed");
            AuthError::PermissionDenied
        })?;

        if claims.is_expired_at(now) {
            tracing::debug!(
                username = %claims.account_username,
                expires_at = claims.expires_at,
                "Token expired"
            );
            return Err(AuthError::PermissionDenied);
        }

        Ok(claims)
    }
}
