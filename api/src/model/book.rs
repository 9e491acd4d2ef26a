use derive_new::new;
use garde::Validate;
use kernel::model::{
    book::{
        event::{CreateBook, UpdateBook},
        Book, BookListOptions,
    },
    id::BookId,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::non_blank;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(skip)]
    pub isbn: Option<String>,
    #[garde(skip)]
    pub genre: Option<String>,
    #[garde(skip)]
    pub year: Option<i32>,
    #[garde(range(min = 1))]
    pub copies: i32,
    #[garde(skip)]
    pub cover_url: Option<String>,
}

impl From<CreateBookRequest> for CreateBook {
    fn from(value: CreateBookRequest) -> Self {
        let CreateBookRequest {
            title,
            author,
            isbn,
            genre,
            year,
            copies,
            cover_url,
        } = value;
        CreateBook::new(
            title,
            author,
            non_blank(isbn),
            non_blank(genre),
            year,
            copies,
            non_blank(cover_url),
        )
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub author: String,
    #[garde(skip)]
    pub isbn: Option<String>,
    #[garde(skip)]
    pub genre: Option<String>,
    #[garde(skip)]
    pub year: Option<i32>,
    #[garde(range(min = 0))]
    pub copies: i32,
    #[garde(skip)]
    pub cover_url: Option<String>,
}

// パスの蔵書IDとボディを合わせて UpdateBook に変換する
#[derive(new)]
pub struct UpdateBookRequestWithId(BookId, UpdateBookRequest);

impl From<UpdateBookRequestWithId> for UpdateBook {
    fn from(value: UpdateBookRequestWithId) -> Self {
        let UpdateBookRequestWithId(
            book_id,
            UpdateBookRequest {
                title,
                author,
                isbn,
                genre,
                year,
                copies,
                cover_url,
            },
        ) = value;
        UpdateBook::new(
            book_id,
            title,
            author,
            non_blank(isbn),
            non_blank(genre),
            year,
            copies,
            non_blank(cover_url),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookListQuery {
    /// Substring matched against title, author, genre or year.
    pub q: Option<String>,
}

impl From<BookListQuery> for BookListOptions {
    fn from(value: BookListQuery) -> Self {
        Self {
            query: non_blank(value.q),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[schema(value_type = String)]
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

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        let Book {
            id,
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
            id,
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
