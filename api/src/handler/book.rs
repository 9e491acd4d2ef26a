use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use kernel::model::{book::event::DeleteBook, id::BookId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{PathParam, ValidatedJson},
    model::{
        book::{
            BookListQuery, BookResponse, CreateBookRequest, UpdateBookRequest,
            UpdateBookRequestWithId,
        },
        loan::LoanResponse,
    },
};

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Created", body = BookResponse),
        (status = 400, description = "Missing or invalid fields, or duplicate ISBN")
    )
)]
pub async fn register_book(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    registry
        .book_repository()
        .create(req.into())
        .await
        .map(|book| (StatusCode::CREATED, Json(book.into())))
}

#[utoipa::path(
    get,
    path = "/api/books",
    params(BookListQuery),
    responses((status = 200, description = "OK", body = [BookResponse]))
)]
pub async fn show_book_list(
    Query(query): Query<BookListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookResponse>>> {
    registry
        .book_repository()
        .find_all(query.into())
        .await
        .map(|books| books.into_iter().map(BookResponse::from).collect())
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/books/{book_id}",
    params(("book_id" = String, Path, description = "Book ID")),
    responses((status = 200, description = "OK", body = BookResponse), (status = 404, description = "Not found"))
)]
pub async fn show_book(
    PathParam(book_id): PathParam<BookId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookResponse>> {
    registry
        .book_repository()
        .find_by_id(book_id)
        .await
        .and_then(|book| match book {
            Some(book) => Ok(Json(book.into())),
            None => Err(AppError::EntityNotFound(format!(
                "Book ({book_id}) was not found."
            ))),
        })
}

#[utoipa::path(
    put,
    path = "/api/books/{book_id}",
    params(("book_id" = String, Path, description = "Book ID")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "OK", body = BookResponse),
        (status = 400, description = "Fewer copies than are currently borrowed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_book(
    PathParam(book_id): PathParam<BookId>,
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    let update_book = UpdateBookRequestWithId::new(book_id, req);
    registry
        .book_repository()
        .update(update_book.into())
        .await
        .map(|book| Json(book.into()))
}

#[utoipa::path(
    delete,
    path = "/api/books/{book_id}",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Book has outstanding loans"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_book(
    PathParam(book_id): PathParam<BookId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .book_repository()
        .delete(DeleteBook::new(book_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/books/{book_id}/borrowed",
    params(("book_id" = String, Path, description = "Book ID")),
    responses((status = 200, description = "OK", body = [LoanResponse]))
)]
pub async fn show_book_loans(
    PathParam(book_id): PathParam<BookId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<LoanResponse>>> {
    registry
        .loan_repository()
        .find_active_by_book_id(book_id)
        .await
        .map(|loans| loans.into_iter().map(LoanResponse::from).collect())
        .map(Json)
}
