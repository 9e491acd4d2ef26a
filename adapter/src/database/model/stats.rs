use kernel::model::stats::LibraryStats;

pub struct StatsRow {
    pub total_books: i64,
    pub available_copies: i64,
    pub active_loans: i64,
    pub members: i64,
}

impl From<StatsRow> for LibraryStats {
    fn from(value: StatsRow) -> Self {
        Self {
            total_books: value.total_books,
            available_copies: value.available_copies,
            active_loans: value.active_loans,
            members: value.members,
        }
    }
}
