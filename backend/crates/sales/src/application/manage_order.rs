//! Manage Order Use Case
//!
//! Every write checks the referenced customer inside the same statement,
//! so create and update remain single round trips.

use std::sync::Arc;

use kernel::id::{CustomerId, OrderId};
use kernel::pagination::{Page, PageRequest, SearchTerm};

use crate::domain::entity::order::{NewOrder, Order, OrderChanges};
use crate::domain::repository::OrderRepository;
use crate::error::{SalesError, SalesResult};

/// Order fields supplied by the caller
pub struct OrderInput {
    pub customer_id: CustomerId,
    pub service: String,
    pub amount: i32,
    pub unit: String,
    pub price: i32,
}

/// Manage order use case
pub struct ManageOrderUseCase<R>
where
    R: OrderRepository,
{
    repo: Arc<R>,
}

impl<R> ManageOrderUseCase<R>
where
    R: OrderRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Search by service description and return one page
    pub async fn list(
        &self,
        term: Option<SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Order>> {
        self.repo.search(term.as_ref(), page).await
    }

    pub async fn get(&self, id: OrderId) -> SalesResult<Order> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(SalesError::OrderNotFound(id))
    }

    pub async fn create(&self, input: OrderInput) -> SalesResult<Order> {
        let customer_id = input.customer_id;
        let new_order = NewOrder::new(
            input.customer_id,
            input.service,
            input.amount,
            input.unit,
            input.price,
        );

        let order = self
            .repo
            .create(&new_order)
            .await?
            .ok_or(SalesError::CustomerNotFound(customer_id))?;

        tracing::info!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            "Order created"
        );
        Ok(order)
    }

    pub async fn update(&self, id: OrderId, input: OrderInput) -> SalesResult<()> {
        let changes = OrderChanges {
            customer_id: input.customer_id,
            service: input.service,
            amount: input.amount,
            unit: input.unit,
            price: input.price,
        };

        if self.repo.update(id, &changes).await? == 0 {
            return Err(SalesError::OrderOrCustomerNotFound {
                order: id,
                customer: changes.customer_id,
            });
        }

        tracing::info!(order_id = %id, customer_id = %changes.customer_id, "Order updated");
        Ok(())
    }

    pub async fn delete(&self, id: OrderId) -> SalesResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(SalesError::OrderNotFound(id));
        }

        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}
