//! Value Object Module

pub mod access_claims;
