use async_trait::async_trait;
use derive_new::new;
use kernel::{model::stats::LibraryStats, repository::stats::StatsRepository};
use shared::error::{AppError, AppResult};

use crate::database::{model::stats::StatsRow, ConnectionPool};

#[derive(new)]
pub struct StatsRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl StatsRepository for StatsRepositoryImpl {
    async fn summarize(&self) -> AppResult<LibraryStats> {
        sqlx::query_as!(
            StatsRow,
            r#"
                SELECT
                (SELECT COUNT(*) FROM books) AS "total_books!",
                (SELECT COALESCE(SUM(available), 0) FROM books)::BIGINT AS "available_copies!",
                (SELECT COUNT(*) FROM loans) AS "active_loans!",
                (SELECT COUNT(*) FROM members) AS "members!"
                ;
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map(LibraryStats::from)
        .map_err(AppError::SpecificOperationError)
    }
}
