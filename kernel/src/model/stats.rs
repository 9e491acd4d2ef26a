#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryStats {
    pub total_books: i64,
    // 全蔵書の貸出可能冊数の合計
    pub available_copies: i64,
    pub active_loans: i64,
    pub members: i64,
}
