//! Common ID Types
//!
//! Type-safe wrappers around the `SERIAL` primary keys used by every table.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID wrapper over a database serial
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type CustomerId = Id<markers::Customer>;
///
/// let id = CustomerId::parse("42").unwrap();
/// assert_eq!(id.value(), 42);
/// ```
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a raw database value
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Parse a path segment such as `/customer/{id}`
    pub fn parse(raw: &str) -> AppResult<Self> {
        raw.trim()
            .parse::<i32>()
            .map(Self::new)
            .map_err(|e| AppError::bad_request(format!("Invalid ID given {raw}")).with_source(e))
    }

    /// Get the underlying serial value
    pub const fn value(&self) -> i32 {
        self.value
    }
}

// Manual impls: derives would put bounds on the marker type
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for `sys_account` rows
    pub struct Account;

    /// Marker for `dt_customer` rows
    pub struct Customer;

    /// Marker for `dt_order` rows
    pub struct Order;
}

pub type AccountId = Id<markers::Account>;
pub type CustomerId = Id<markers::Customer>;
pub type OrderId = Id<markers::Order>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = OrderId::parse("17").unwrap();
        assert_eq!(id.value(), 17);
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn test_parse_invalid_keeps_original_text() {
        let err = CustomerId::parse("abc").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Invalid ID given abc");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let id = AccountId::new(5);
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");

        let back: AccountId = serde_json::from_str("5").unwrap();
        assert_eq!(back, id);
    }
}
