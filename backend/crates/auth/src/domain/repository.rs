//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::AccountId;
use kernel::pagination::{Page, PageRequest, SearchTerm};

use crate::domain::entity::account::{Account, AccountChanges, NewAccount};
use crate::error::AuthResult;

/// Account repository trait
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Insert and return the stored row
    async fn create(&self, account: &NewAccount) -> AuthResult<Account>;

    async fn find_by_id(&self, id: AccountId) -> AuthResult<Option<Account>>;

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Account>>;

    /// Filter by name, ordered by id, then slice to `page`
    async fn search(&self, term: Option<&SearchTerm>, page: PageRequest)
    -> AuthResult<Page<Account>>;

    /// Returns the number of rows updated
    async fn update(&self, id: AccountId, changes: &AccountChanges) -> AuthResult<u64>;

    /// Returns the number of rows deleted
    async fn delete(&self, id: AccountId) -> AuthResult<u64>;
}
