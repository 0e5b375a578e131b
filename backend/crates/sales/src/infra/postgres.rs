//! PostgreSQL Repository Implementations (`dt_customer`, `dt_order`)

use chrono::{DateTime, Utc};
use kernel::id::{CustomerId, OrderId};
use kernel::pagination::{Page, PageRequest, SearchTerm};
use sqlx::PgPool;

use crate::domain::entity::customer::{Customer, CustomerChanges, NewCustomer};
use crate::domain::entity::order::{NewOrder, Order, OrderChanges};
use crate::domain::repository::{CustomerRepository, OrderRepository};
use crate::error::SalesResult;

/// PostgreSQL-backed customer and order repository
#[derive(Clone)]
pub struct PgSalesRepository {
    pool: PgPool,
}

impl PgSalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Customer Repository Implementation
// ============================================================================

impl CustomerRepository for PgSalesRepository {
    async fn create(&self, customer: &NewCustomer) -> SalesResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO dt_customer (name, phone, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, phone, created_at
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.phone)
        .bind(customer.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: CustomerId) -> SalesResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, created_at
            FROM dt_customer
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Customer>> {
        let pattern = term.map(SearchTerm::ilike_pattern);

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM dt_customer
            WHERE ($1::text IS NULL OR name ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, created_at
            FROM dt_customer
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

        let customers = rows.into_iter().map(Customer::from).collect();
        Ok(Page::new(customers, count, &page))
    }

    async fn update(&self, id: CustomerId, changes: &CustomerChanges) -> SalesResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE dt_customer SET
                name = $2,
                phone = $3
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .bind(&changes.name)
        .bind(&changes.phone)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn delete(&self, id: CustomerId) -> SalesResult<u64> {
        let deleted = sqlx::query("DELETE FROM dt_customer WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Order Repository Implementation
// ============================================================================

impl OrderRepository for PgSalesRepository {
    async fn create(&self, order: &NewOrder) -> SalesResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            WITH inserted AS (
                INSERT INTO dt_order (customer_id, service, amount, unit, price, created_at)
                SELECT $1, $2, $3, $4, $5, $6
                WHERE EXISTS (SELECT 1 FROM dt_customer WHERE id = $1)
                RETURNING id, customer_id, service, amount, unit, price, created_at
            )
            SELECT
                i.id,
                i.customer_id,
                c.name,
                c.phone,
                i.service,
                i.amount,
                i.unit,
                i.price,
                i.created_at
            FROM inserted i
            JOIN dt_customer c ON c.id = i.customer_id
            "#,
        )
        .bind(order.customer_id.value())
        .bind(&order.service)
        .bind(order.amount)
        .bind(&order.unit)
        .bind(order.price)
        .bind(order.created_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    async fn find_by_id(&self, id: OrderId) -> SalesResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                o.id,
                o.customer_id,
                c.name,
                c.phone,
                o.service,
                o.amount,
                o.unit,
                o.price,
                o.created_at
            FROM dt_order o
            JOIN dt_customer c ON c.id = o.customer_id
            WHERE o.id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Order::from))
    }

    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Order>> {
        let pattern = term.map(SearchTerm::ilike_pattern);

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM dt_order o
            JOIN dt_customer c ON c.id = o.customer_id
            WHERE ($1::text IS NULL OR o.service ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT
                o.id,
                o.customer_id,
                c.name,
                c.phone,
                o.service,
                o.amount,
                o.unit,
                o.price,
                o.created_at
            FROM dt_order o
            JOIN dt_customer c ON c.id = o.customer_id
            WHERE ($1::text IS NULL OR o.service ILIKE $1)
            ORDER BY o.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let orders = rows.into_iter().map(Order::from).collect();
        Ok(Page::new(orders, count, &page))
    }

    async fn update(&self, id: OrderId, changes: &OrderChanges) -> SalesResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE dt_order SET
                customer_id = $2,
                service = $3,
                amount = $4,
                unit = $5,
                price = $6
            WHERE id = $1
              AND EXISTS (SELECT 1 FROM dt_customer WHERE id = $2)
            "#,
        )
        .bind(id.value())
        .bind(changes.customer_id.value())
        .bind(&changes.service)
        .bind(changes.amount)
        .bind(&changes.unit)
        .bind(changes.price)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn delete(&self, id: OrderId) -> SalesResult<u64> {
        let deleted = sqlx::query("DELETE FROM dt_order WHERE id = $1")
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
struct CustomerRow {
    id: i32,
    name: String,
    phone: String,
    created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: CustomerId::new(row.id),
            name: row.name,
            phone: row.phone,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    customer_id: i32,
    name: String,
    phone: String,
    service: String,
    amount: i32,
    unit: String,
    price: i32,
    created_at: DateTime<Utc>,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: OrderId::new(row.id),
            customer_id: CustomerId::new(row.customer_id),
            name: row.name,
            phone: row.phone,
            service: row.service,
            amount: row.amount,
            unit: row.unit,
            price: row.price,
            created_at: row.created_at,
        }
    }
}
