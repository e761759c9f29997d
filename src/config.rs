use std::{env, fmt, net::SocketAddr};

use subtle::ConstantTimeEq;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub bot_host: String,
    pub shared_secret: SharedSecret,
    pub danger_accept_invalid_bot_certs: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cotravel.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let bot_host =
            env::var("TG_BOT_HOST").map_err(|_| AppError::Config("TG_BOT_HOST must be set".into()))?;

        let shared_secret = env::var("BACKEND_SECRET_TOKEN")
            .map(SharedSecret::new)
            .map_err(|_| AppError::Config("BACKEND_SECRET_TOKEN must be set".into()))?;

        let danger_accept_invalid_bot_certs = env::var("TG_BOT_ACCEPT_INVALID_CERTS")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            listen_addr,
            bot_host,
            shared_secret,
            danger_accept_invalid_bot_certs,
        })
    }
}

/// Pre-shared key authenticating traffic between this backend and the bot.
/// Resolved once at startup; never printed.
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Constant-time comparison against a presented token.
    pub fn matches(&self, presented: &str) -> bool {
        self.0.as_bytes().ct_eq(presented.as_bytes()).into()
    }

    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}
