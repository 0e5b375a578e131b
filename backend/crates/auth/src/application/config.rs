//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared behind an `Arc`; nothing here is re-read per request.

use std::time::Duration;

use platform::token::TokenSigner;
use rand::RngCore;

/// Header carrying the access token on every gated request
pub const TOKEN_HEADER: &str = "x-jwt-token";

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Request header the gate reads the token from
    pub token_header: String,
    /// Lifetime of an issued token
    pub token_ttl: Duration,
    signer: TokenSigner,
}

impl AuthConfig {
    /// Config signing tokens with `secret`
    pub fn new(secret: &[u8]) -> Self {
        Self {
            token_header: TOKEN_HEADER.to_string(),
            token_ttl: DEFAULT_TOKEN_TTL,
            signer: TokenSigner::new(secret),
        }
    }

    /// Create config with a random 32-byte secret (for development)
    ///
    /// Tokens stop verifying when the process restarts.
    pub fn development() -> Self {
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::new(&secret)
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Token TTL as a chrono duration, saturating on overflow
    pub fn token_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.token_ttl).unwrap_or(chrono::Duration::MAX)
    }
}
