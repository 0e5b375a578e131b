//! Customer Entity

use chrono::{DateTime, Utc};
use kernel::id::CustomerId;

/// Stored customer (`dt_customer` row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Customer about to be inserted
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl NewCustomer {
    /// Stamp with the current UTC time
    pub fn new(name: String, phone: String) -> Self {
        Self {
            name,
            phone,
            created_at: Utc::now(),
        }
    }

    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}

/// Full replacement of a customer's mutable fields
#[derive(Debug, Clone)]
pub struct CustomerChanges {
    pub name: String,
    pub phone: String,
}
