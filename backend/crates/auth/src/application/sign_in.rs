//! Sign In Use Case
//!
//! Authenticates an account by username and password and issues a token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::issue_token::IssueTokenUseCase;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub account: Account,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let account = self
            .repo
            .find_by_username(&input.username)
            .await?
            .ok_or_else(|| AuthError::UsernameNotFound(input.username.clone()))?;

        // Over-long input can never match a stored hash
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let stored = account.password.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || stored.verify(&password)).await?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = IssueTokenUseCase::new(self.config.clone()).execute(&account)?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Account signed in"
        );

        Ok(SignInOutput { account, token })
    }
}
