//! Manage Customer Use Case

use std::sync::Arc;

use kernel::id::CustomerId;
use kernel::pagination::{Page, PageRequest, SearchTerm};

use crate::domain::entity::customer::{Customer, CustomerChanges, NewCustomer};
use crate::domain::repository::CustomerRepository;
use crate::error::{SalesError, SalesResult};

/// Customer fields supplied by the caller
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
}

/// Manage customer use case
pub struct ManageCustomerUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
}

impl<R> ManageCustomerUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        term: Option<SearchTerm>,
        page: PageRequest,
    ) -> SalesResult<Page<Customer>> {
        self.repo.search(term.as_ref(), page).await
    }

    pub async fn get(&self, id: CustomerId) -> SalesResult<Customer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(SalesError::CustomerNotFound(id))
    }

    pub async fn create(&self, input: CustomerInput) -> SalesResult<Customer> {
        let customer = self
            .repo
            .create(&NewCustomer::new(input.name, input.phone))
            .await?;

        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    pub async fn update(&self, id: CustomerId, input: CustomerInput) -> SalesResult<()> {
        let changes = CustomerChanges {
            name: input.name,
            phone: input.phone,
        };

        if self.repo.update(id, &changes).await? == 0 {
            return Err(SalesError::CustomerNotFound(id));
        }

        tracing::info!(customer_id = %id, "Customer updated");
        Ok(())
    }

    /// Orders of a deleted customer stay stored but drop out of reads
    pub async fn delete(&self, id: CustomerId) -> SalesResult<()> {
        if self.repo.delete(id).await? == 0 {
            return Err(SalesError::CustomerNotFound(id));
        }

        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}
