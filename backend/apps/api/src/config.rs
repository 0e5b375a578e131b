//! Server configuration read from the environment

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 3600;

/// Startup settings, read once in `main`
#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            var("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let bind_addr = parse_or("BIND_ADDR", var("BIND_ADDR"), DEFAULT_BIND_ADDR.parse()?)?;
        let ttl_secs = parse_or(
            "TOKEN_TTL_SECS",
            var("TOKEN_TTL_SECS"),
            DEFAULT_TOKEN_TTL_SECS,
        )?;

        let auth = auth_config(var("JWT_SECRET"), cfg!(debug_assertions))?
            .with_token_ttl(Duration::from_secs(ttl_secs));

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            auth,
        })
    }
}

/// Non-empty environment variable
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        None => Ok(default),
    }
}

/// Debug builds fall back to a random secret; release builds require one
fn auth_config(secret: Option<String>, allow_random: bool) -> anyhow::Result<AuthConfig> {
    match secret {
        Some(secret) => Ok(AuthConfig::new(secret.as_bytes())),
        None if allow_random => {
            tracing::warn!("JWT_SECRET not set, using a random per-process secret");
            Ok(AuthConfig::development())
        }
        None => bail!("JWT_SECRET must be set in production"),
    }
}
