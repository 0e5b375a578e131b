//! Sales Backend Module
//!
//! Customers and the orders placed for them, in the same layered structure
//! as the `auth` crate:
//! - `domain/` - Customer and order entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router behind the auth token gate
//!
//! Orders are always read joined with their customer; an order whose
//! customer has been deleted no longer appears in lists or lookups.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{SalesError, SalesResult};
pub use infra::postgres::PgSalesRepository;
pub use presentation::router::sales_router;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[cfg(test)]
mod tests;
