//! PostgreSQL Repository Implementation (`sys_account`)

use chrono::{DateTime, Utc};
use kernel::id::AccountId;
use kernel::pagination::{Page, PageRequest, SearchTerm};
use platform::password::HashedPassword;
use sqlx::PgPool;

use crate::domain::entity::account::{Account, AccountChanges, NewAccount};
use crate::domain::repository::AccountRepository;
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &NewAccount) -> AuthResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO sys_account (name, phone, username, password, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, phone, username, password, created_at
            "#,
        )
        .bind(&account.name)
        .bind(&account.phone)
        .bind(&account.username)
        .bind(account.password.as_phc_string())
        .bind(account.created_at)
        .fetch_one(&self.pool)
        .await?;

        row.into_account()
    }

    async fn find_by_id(&self, id: AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, phone, username, password, created_at
            FROM sys_account
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, phone, username, password, created_at
            FROM sys_account
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(AccountRow::into_account).transpose()
    }

    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> AuthResult<Page<Account>> {
        let pattern = term.map(SearchTerm::ilike_pattern);

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM sys_account
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, phone, username, password, created_at
            FROM sys_account
            WHERE ($1::text IS NULL OR name ILIKE $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let accounts = rows
            .into_iter()
            .map(AccountRow::into_account)
            .collect::<AuthResult<Vec<_>>>()?;

        Ok(Page::new(accounts, count, &page))
    }

    async fn update(&self, id: AccountId, changes: &AccountChanges) -> AuthResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE sys_account SET
                name = $2,
                phone = $3,
                password = $4
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .bind(&changes.name)
        .bind(&changes.phone)
        .bind(changes.password.as_phc_string())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn delete(&self, id: AccountId) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM sys_account WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: i32,
    name: String,
    phone: String,
    username: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let password = HashedPassword::from_phc_string(self.password).map_err(|e| {
            AuthError::Internal(format!("Invalid password hash for account {}: {e}", self.id))
        })?;

        Ok(Account {
            id: AccountId::new(self.id),
            name: self.name,
            phone: self.phone,
            username: self.username,
            password,
            created_at: self.created_at,
        })
    }
}
