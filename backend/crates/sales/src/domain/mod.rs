//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::customer::{Customer, CustomerChanges, NewCustomer};
pub use entity::order::{NewOrder, Order, OrderChanges};
pub use repository::{CustomerRepository, OrderRepository};
