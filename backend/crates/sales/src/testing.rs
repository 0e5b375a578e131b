//! In-memory sales store for tests
//!
//! Keeps raw `dt_order` rows and joins them with customers on read, so an
//! order whose customer is gone disappears the same way it does in Postgres.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::{CustomerId, OrderId};
use kernel::pagination::{Page, PageRequest, SearchTerm};
use tokio::sync::Mutex;

use crate::domain::entity::customer::{Customer, CustomerChanges, NewCustomer};
use crate::domain::entity::order::{NewOrder, Order, OrderChanges};
use crate::domain::repository::{CustomerRepository, OrderRepository};
use crate::error::SalesResult;

/// `dt_order` row before the join
#[derive(Clone)]
struct OrderRecord {
    customer_id: i32,
    service: String,
    amount: i32,
    unit: String,
    price: i32,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct Store {
    next_customer_id: i32,
    next_order_id: i32,
    customers: BTreeMap<i32, Customer>,
    orders: BTreeMap<i32, OrderRecord>,
}

impl Store {
    fn joined(&self, id: i32, record: &OrderRecord) -> Option<Order> {
        let customer = self.customers.get(&record.customer_id)?;
        Some(Order {
            id: OrderId::new(id),
            customer_id: customer.id,
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            service: record.service.clone(),
            amount: record.amount,
            unit: record.unit.clone(),
            price: record.price,
            created_at: record.created_at,
        })
    }
}

fn paginate<T>(matching: Vec<T>, page: PageRequest) -> Page<T> {
    let count = matching.len() as i64;
    let items = matching
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    Page::new(items, count, &page)
}

#[derive(Clone, Default)]
pub struct InMemorySalesRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemorySalesRepository {
    /// Stored customer rows
    pub async fn stored_customers(&self) -> usize {
        self.store.lock().await.customers.len()
    }

    /// Stored order rows, including ones hidden by the join
    pub async fn stored_orders(&self) -> usize {
        self.store.lock().await.orders.len()
    }
}

impl CustomerRepository for InMemorySalesRepository {
    async fn create(&self, customer: &NewCustomer) -> SalesResult<Customer> {
        let mut store = self.store.lock().await;
        store.next_customer_id += 1;
        let id = store.next_customer_id;
        let created = customer.clone().into_customer(CustomerId::new(id));
        store.customers.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CustomerId) -> SalesResult<Option<Customer>> {
        Ok(self.store.lock().await.customers.get(&id.value()).cloned())
    }

    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Customer>> {
        let store = self.store.lock().await;
        let matching = store
            .customers
            .values()
            .filter(|c| term.is_none_or(|t| t.matches(&c.name)))
            .cloned()
            .collect();
        Ok(paginate(matching, page))
    }

    async fn update(&self, id: CustomerId, changes: &CustomerChanges) -> SalesResult<u64> {
        let mut store = self.store.lock().await;
        let Some(customer) = store.customers.get_mut(&id.value()) else {
            return Ok(0);
        };
        customer.name = changes.name.clone();
        customer.phone = changes.phone.clone();
        Ok(1)
    }

    async fn delete(&self, id: CustomerId) -> SalesResult<u64> {
        let mut store = self.store.lock().await;
        Ok(store.customers.remove(&id.value()).map_or(0, |_| 1))
    }
}

impl OrderRepository for InMemorySalesRepository {
    async fn create(&self, order: &NewOrder) -> SalesResult<Option<Order>> {
        let mut store = self.store.lock().await;
        if !store.customers.contains_key(&order.customer_id.value()) {
            return Ok(None);
        }
        store.next_order_id += 1;
        let id = store.next_order_id;
        let record = OrderRecord {
            customer_id: order.customer_id.value(),
            service: order.service.clone(),
            amount: order.amount,
            unit: order.unit.clone(),
            price: order.price,
            created_at: order.created_at,
        };
        let joined = store.joined(id, &record);
        store.orders.insert(id, record);
        Ok(joined)
    }

    async fn find_by_id(&self, id: OrderId) -> SalesResult<Option<Order>> {
        let store = self.store.lock().await;
        Ok(store
            .orders
            .get(&id.value())
            .and_then(|record| store.joined(id.value(), record)))
    }

    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Order>> {
        let store = self.store.lock().await;
        let matching = store
            .orders
            .iter()
            .filter_map(|(id, record)| store.joined(*id, record))
            .filter(|o| term.is_none_or(|t| t.matches(&o.service)))
            .collect();
        Ok(paginate(matching, page))
    }

    async fn update(&self, id: OrderId, changes: &OrderChanges) -> SalesResult<u64> {
        let mut store = self.store.lock().await;
        if !store.customers.contains_key(&changes.customer_id.value()) {
            return Ok(0);
        }
        let Some(record) = store.orders.get_mut(&id.value()) else {
            return Ok(0);
        };
        record.customer_id = changes.customer_id.value();
        record.service = changes.service.clone();
        record.amount = changes.amount;
        record.unit = changes.unit.clone();
        record.price = changes.price;
        Ok(1)
    }

    async fn delete(&self, id: OrderId) -> SalesResult<u64> {
        let mut store = self.store.lock().await;
        Ok(store.orders.remove(&id.value()).map_or(0, |_| 1))
    }
}
