use kernel::model::stats::LibraryStats;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_books: i64,
    pub available_copies: i64,
    pub active_loans: i64,
    pub members: i64,
}

impl From<LibraryStats> for StatsResponse {
    fn from(value: LibraryStats) -> Self {
        let LibraryStats {
            total_books,
            available_copies,
            active_loans,
            members,
        } = value;
        Self {
            total_books,
            available_copies,
            active_loans,
            members,
        }
    }
}
