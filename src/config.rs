use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Process-wide configuration, read from the environment once at startup
/// and passed explicitly to the pieces that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub token_secret: String,
    pub token_ttl_minutes: i64,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let token_secret = std::env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set")?;
        let token_ttl_minutes = match std::env::var("TOKEN_TTL_MINUTES") {
            Ok(raw) => raw
                .parse()
                .context("TOKEN_TTL_MINUTES must be an integer")?,
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES,
        };
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        Ok(AppConfig {
            database_url,
            token_secret,
            token_ttl_minutes,
            bind_addr,
        })
    }
}
