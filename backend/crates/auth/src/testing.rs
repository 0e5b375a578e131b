//! In-memory account store for tests
//!
//! Compiled for this crate's own tests and, through the `testing` feature,
//! for crates that assemble the auth router in their tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::AccountId;
use kernel::pagination::{Page, PageRequest, SearchTerm};
use tokio::sync::Mutex;

use crate::domain::entity::account::{Account, AccountChanges, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<i32, Account>,
}

/// `sys_account` stand-in: serial ids, unique usernames, id ordering
#[derive(Clone, Default)]
pub struct InMemoryAccountRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryAccountRepository {
    pub async fn len(&self) -> usize {
        self.store.lock().await.rows.len()
    }

    pub async fn get(&self, id: i32) -> Option<Account> {
        self.store.lock().await.rows.get(&id).cloned()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &NewAccount) -> AuthResult<Account> {
        let mut store = self.store.lock().await;
        if store.rows.values().any(|a| a.username == account.username) {
            return Err(AuthError::Request(AppError::new(
                ErrorKind::Conflict,
                "duplicate key value violates unique constraint \"sys_account_username_key\"",
            )));
        }
        store.next_id += 1;
        let id = store.next_id;
        let created = account.clone().into_account(AccountId::new(id));
        store.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: AccountId) -> AuthResult<Option<Account>> {
        Ok(self.get(id.value()).await)
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Account>> {
        let store = self.store.lock().await;
        Ok(store.rows.values().find(|a| a.username == username).cloned())
    }

    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> AuthResult<Page<Account>> {
        let store = self.store.lock().await;
        let matching: Vec<Account> = store
            .rows
            .values()
            .filter(|a| term.is_none_or(|t| t.matches(&a.name)))
            .cloned()
            .collect();
        let count = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(items, count, &page))
    }

    async fn update(&self, id: AccountId, changes: &AccountChanges) -> AuthResult<u64> {
        let mut store = self.store.lock().await;
        let Some(account) = store.rows.get_mut(&id.value()) else {
            return Ok(0);
        };
        account.name = changes.name.clone();
        account.phone = changes.phone.clone();
        account.password = changes.password.clone();
        Ok(1)
    }

    async fn delete(&self, id: AccountId) -> AuthResult<u64> {
        let mut store = self.store.lock().await;
        Ok(store.rows.remove(&id.value()).map_or(0, |_| 1))
    }
}
