use derive_new::new;

use crate::model::id::BookId;

#[derive(Debug, new)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub copies: i32,
    pub cover_url: Option<String>,
}

#[derive(Debug, new)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub copies: i32,
    pub cover_url: Option<String>,
}

#[derive(Debug, new)]
pub struct DeleteBook {
    pub book_id: BookId,
}
