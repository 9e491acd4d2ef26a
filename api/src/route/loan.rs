use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::loan::{borrow_book, borrow_book_as_student, return_book, show_active_loans};

pub fn build_loan_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/borrowed", get(show_active_loans))
        .route("/borrow", post(borrow_book))
        .route("/return", post(return_book))
        .route("/student/borrow", post(borrow_book_as_student))
}
