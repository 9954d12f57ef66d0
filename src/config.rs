//! Runtime settings from the environment (after `.env` has been loaded).

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Which store the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    /// Data lives only as long as the process.
    Memory,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Maximum accepted request body, in bytes.
    pub request_body_limit: usize,
    pub store: StoreKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "postgres://localhost/wpm_management".into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_connections: 5,
            request_body_limit: 64 * 1024,
            store: StoreKind::Postgres,
        }
    }
}

impl Settings {
    /// DATABASE_URL, BIND_ADDR, DATABASE_MAX_CONNECTIONS, REQUEST_BODY_LIMIT, WPM_STORE.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();
        if let Some(url) = lookup("DATABASE_URL") {
            s.database_url = url;
        }
        if let Some(v) = lookup("BIND_ADDR") {
            s.bind_addr = parse("BIND_ADDR", v)?;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            s.max_connections = parse("DATABASE_MAX_CONNECTIONS", v)?;
        }
        if let Some(v) = lookup("REQUEST_BODY_LIMIT") {
            s.request_body_limit = parse("REQUEST_BODY_LIMIT", v)?;
        }
        if let Some(v) = lookup("WPM_STORE") {
            s.store = match v.trim().to_ascii_lowercase().as_str() {
                "postgres" => StoreKind::Postgres,
                "memory" => StoreKind::Memory,
                _ => return Err(ConfigError::Invalid { key: "WPM_STORE", value: v }),
            };
        }
        Ok(s)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}
