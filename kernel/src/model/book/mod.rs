use shared::error::{AppError, AppResult};

use super::id::BookId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub copies: i32,
    pub available: i32,
    pub cover_url: Option<String>,
}

impl Book {
    /// Number of copies currently lent out.
    pub fn lent_out(&self) -> i32 {
        self.copies - self.available
    }

    /// Recomputes the available count after the total number of copies
    /// changes to `new_copies`. Copies that are lent out stay lent out, so
    /// the edit is rejected when it would claim fewer copies than that.
    pub fn recompute_available(&self, new_copies: i32) -> AppResult<i32> {
        let available = self.available + (new_copies - self.copies);
        if available < 0 {
            return Err(AppError::Conflict(format!(
                "Cannot set copies of book ({}) to {}: {} copies are currently borrowed.",
                self.id,
                new_copies,
                self.lent_out()
            )));
        }
        Ok(available)
    }
}

// 書籍一覧の絞り込み条件
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookListOptions {
    pub query: Option<String>,
}
