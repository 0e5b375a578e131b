//! Entity Module

pub mod customer;
pub mod order;
