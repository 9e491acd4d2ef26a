use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::stats::LibraryStats;

#[mockall::automock]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn summarize(&self) -> AppResult<LibraryStats>;
}
