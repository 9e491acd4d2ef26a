use secrecy::ExposeSecret;
use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{
    migrate::Migrator,
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

pub mod model;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

fn make_pg_connect_options(cfg: &DatabaseConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .username(&cfg.username)
        .password(cfg.password.expose_secret())
        .database(&cfg.database)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }

    // 戻り値の Transaction は commit されずに drop されるとロールバックされ、
    // コネクションはプールに返却される
    pub async fn begin(&self) -> AppResult<sqlx::Transaction<'_, sqlx::Postgres>> {
        self.0.begin().await.map_err(AppError::TransactionError)
    }

    pub async fn close(&self) {
        self.0.close().await
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> ConnectionPool {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect_lazy_with(make_pg_connect_options(cfg));
    ConnectionPool(pool)
}

/// Unique-constraint violations become a [`AppError::Conflict`] carrying
/// `message`; every other storage error is passed through unchanged.
pub(crate) fn conflict_on_unique_violation(e: sqlx::Error, message: impl Into<String>) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(message.into()),
        _ => AppError::SpecificOperationError(e),
    }
}
