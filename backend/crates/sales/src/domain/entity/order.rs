//! Order Entity
//!
//! An order row carries only `customer_id`; `name` and `phone` are read
//! from the customer at query time. Orders whose customer no longer
//! exists are invisible to reads.

use chrono::{DateTime, Utc};
use kernel::id::{CustomerId, OrderId};

/// Order joined with its customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    /// Customer name
    pub name: String,
    /// Customer phone
    pub phone: String,
    pub service: String,
    pub amount: i32,
    pub unit: String,
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

/// Order about to be inserted
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub service: String,
    pub amount: i32,
    pub unit: String,
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

impl NewOrder {
    /// Stamp with the current UTC time
    pub fn new(
        customer_id: CustomerId,
        service: String,
        amount: i32,
        unit: String,
        price: i32,
    ) -> Self {
        Self {
            customer_id,
            service,
            amount,
            unit,
            price,
            created_at: Utc::now(),
        }
    }
}

/// Full replacement of an order's mutable fields
#[derive(Debug, Clone)]
pub struct OrderChanges {
    pub customer_id: CustomerId,
    pub service: String,
    pub amount: i32,
    pub unit: String,
    pub price: i32,
}
