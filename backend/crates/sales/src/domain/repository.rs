//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CustomerId, OrderId};
use kernel::pagination::{Page, PageRequest, SearchTerm};

use crate::domain::entity::customer::{Customer, CustomerChanges, NewCustomer};
use crate::domain::entity::order::{NewOrder, Order, OrderChanges};
use crate::error::SalesResult;

/// Customer repository trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Insert and return the stored row
    async fn create(&self, customer: &NewCustomer) -> SalesResult<Customer>;

    async fn find_by_id(&self, id: CustomerId) -> SalesResult<Option<Customer>>;

    /// Filter by name, ordered by id, then slice to `page`
    async fn search(
        &self,
        term: Option<&SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Customer>>;

    /// Returns the number of rows updated
    async fn update(&self, id: CustomerId, changes: &CustomerChanges) -> SalesResult<u64>;

    /// Returns the number of rows deleted; orders are left in place
    async fn delete(&self, id: CustomerId) -> SalesResult<u64>;
}

/// Order repository trait
///
/// Reads inner-join the customer table.
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Insert and return the joined row; `None` if the customer is missing
    async fn create(&self, order: &NewOrder) -> SalesResult<Option<Order>>;

    async fn find_by_id(&self, id: OrderId) -> SalesResult<Option<Order>>;

    /// Filter by service, ordered by id, then slice to `page`
    async fn search(&self, term: Option<&SearchTerm>, page: PageRequest)
    -> SalesResult<Page<Order>>;

    /// Returns the number of rows updated; zero if the order or the
    /// referenced customer is missing
    async fn update(&self, id: OrderId, changes: &OrderChanges) -> SalesResult<u64>;

    /// Returns the number of rows deleted
    async fn delete(&self, id: OrderId) -> SalesResult<u64>;
}
