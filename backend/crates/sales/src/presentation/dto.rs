//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{CustomerId, OrderId};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::domain::entity::customer::Customer;
use crate::domain::entity::order::Order;

// ============================================================================
// Customer
// ============================================================================

/// Create / update customer request (any `id` in the body is ignored)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CustomerRequest {
    pub name: String,
    pub phone: String,
}

/// Customer as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomerResponse {
    #[schema(value_type = i32)]
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            created_at: customer.created_at,
        }
    }
}

// ============================================================================
// Order
// ============================================================================

/// Create / update order request (any `id` in the body is ignored)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderRequest {
    #[schema(value_type = i32)]
    pub customer_id: CustomerId,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub amount: i32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub price: i32,
}

/// Order joined with its customer's name and phone
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderResponse {
    #[schema(value_type = i32)]
    pub id: OrderId,
    #[schema(value_type = i32)]
    pub customer_id: CustomerId,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub amount: i32,
    pub unit: String,
    pub price: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            name: order.name,
            phone: order.phone,
            service: order.service,
            amount: order.amount,
            unit: order.unit,
            price: order.price,
            created_at: order.created_at,
        }
    }
}

// ============================================================================
// Mutation receipts: `{"<action> <entity>": id}`
// ============================================================================

pub fn customer_updated(id: CustomerId) -> Value {
    json!({ "updated customer": id })
}

pub fn customer_deleted(id: CustomerId) -> Value {
    json!({ "deleted customer": id })
}

pub fn order_updated(id: OrderId) -> Value {
    json!({ "updated order": id })
}

pub fn order_deleted(id: OrderId) -> Value {
    json!({ "deleted order": id })
}
