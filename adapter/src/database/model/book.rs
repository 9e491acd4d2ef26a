use kernel::model::{book::Book, id::BookId};

pub struct BookRow {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub copies: i32,
    pub available: i32,
    pub cover_url: Option<String>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        let BookRow {
            book_id,
            title,
            author,
            isbn,
            genre,
            year,
            copies,
            available,
            cover_url,
        } = value;
        Self {
            id: book_id,
            title,
            author,
            isbn,
            genre,
            year,
            copies,
            available,
            cover_url,
        }
    }
}

// 貸出時に行ロックを取って読み直す列だけを持つ
pub struct BookAvailabilityRow {
    pub book_id: BookId,
    pub title: String,
    pub available: i32,
}
