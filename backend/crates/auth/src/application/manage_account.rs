//! Manage Account Use Case
//!
//! List, get, update and delete for accounts. Creation goes through
//! [`RegisterUseCase`](crate::application::register::RegisterUseCase).

use std::sync::Arc;

use kernel::id::AccountId;
use kernel::pagination::{Page, PageRequest, SearchTerm};

use crate::application::register::hash_password;
use crate::domain::entity::account::{Account, AccountChanges};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// Update input: full replacement of name, phone and password
pub struct UpdateAccountInput {
    pub name: String,
    pub phone: String,
    pub password: String,
}

/// Manage account use case
pub struct ManageAccountUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> ManageAccountUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Search by name and return one page
    pub async fn list(
        &self,
        term: Option<SearchTerm>,
        page: PageRequest,
    ) -> AuthResult<Page<Account>> {
        self.repo.search(term.as_ref(), page).await
    }

    pub async fn get(&self, id: AccountId) -> AuthResult<Account> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AuthError::AccountNotFound(id))
    }

    /// Re-hashes the password on every update
    pub async fn update(&self, id: AccountId, input: UpdateAccountInput) -> AuthResult<()> {
        let changes = AccountChanges {
            name: input.name,
            phone: input.phone,
            password: hash_password(input.password).await?,
        };

        if self.repo.update(id, &changes).await? == 0 {
            return Err(AuthError::AccountNotFound(id));
        }

        tracing::info!(account_id = %id, "Account updated");
        Ok(())
    }

    pub async fn delete(&self, id: AccountId) -> AuthResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(AuthError::AccountNotFound(id));
        }

        tracing::info!(account_id = %id, "Account deleted");
        Ok(())
    }
}
