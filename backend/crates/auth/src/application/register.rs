//! Register Use Case
//!
//! Creates an account with a freshly hashed password. Used by the public
//! `/register` endpoint and the gated `POST /account`.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub phone: String,
    pub username: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<Account> {
        let password = hash_password(input.password).await?;

        let new_account = NewAccount::new(input.name, input.phone, input.username, password);
        let account = self.repo.create(&new_account).await?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Account registered"
        );

        Ok(account)
    }
}

/// Validate the length limit, then hash off the async executor
pub(crate) async fn hash_password(raw: String) -> AuthResult<HashedPassword> {
    let password = ClearTextPassword::new(raw)?;
    let hashed = tokio::task::spawn_blocking(move || password.hash()).await??;
    Ok(hashed)
}
