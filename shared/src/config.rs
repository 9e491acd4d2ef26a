use std::{str::FromStr, time::Duration};

use anyhow::{Context, Result};
use secrecy::SecretString;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: required("DATABASE_HOST")?,
            port: optional("DATABASE_PORT", 5432)?,
            username: required("DATABASE_USERNAME")?,
            password: SecretString::new(required("DATABASE_PASSWORD")?),
            database: required("DATABASE_NAME")?,
            max_connections: optional("DATABASE_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(optional("DATABASE_ACQUIRE_TIMEOUT_SECS", 10)?),
        };
        let server = ServerConfig {
            port: optional("PORT", 8080)?,
        };
        Ok(Self { database, server })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub database: String,
    // コネクションプールの上限。プールは唯一の共有リソース
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

pub struct ServerConfig {
    pub port: u16,
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("environment variable {key} is not set"))
}

fn optional<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("environment variable {key} has an invalid value: {v}")),
        Err(_) => Ok(default),
    }
}
