use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::book::{
    delete_book, register_book, show_book, show_book_list, show_book_loans, update_book,
};

pub fn build_book_routers() -> Router<AppRegistry> {
    let books_routers = Router::new()
        .route("/", get(show_book_list).post(register_book))
        .route(
            "/:book_id",
            get(show_book).put(update_book).delete(delete_book),
        )
        .route("/:book_id/borrowed", get(show_book_loans));

    Router::new().nest("/books", books_routers)
}
