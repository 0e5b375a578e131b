//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no business vocabulary:
//! - Password hashing (Argon2id, bounded input length)
//! - HMAC-signed claims tokens (JWT)
//! - Request header helpers

pub mod header;
pub mod password;
pub mod token;
