//! Application Layer
//!
//! Use cases for customers and orders.

pub mod manage_customer;
pub mod manage_order;

// Re-exports
pub use manage_customer::{CustomerInput, ManageCustomerUseCase};
pub use manage_order::{ManageOrderUseCase, OrderInput};
