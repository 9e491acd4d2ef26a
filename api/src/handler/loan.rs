use axum::{extract::State, http::StatusCode, Json};
use chrono::Local;
use kernel::model::loan::event::{Borrower, CreateLoan, ReturnLoan};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::ValidatedJson,
    model::loan::{BorrowRequest, LoanResponse, ReturnRequest, ReturnResponse, StudentBorrowRequest},
};

#[utoipa::path(
    post,
    path = "/api/borrow",
    request_body = BorrowRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 400, description = "Book is unavailable"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn borrow_book(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<BorrowRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let event = CreateLoan::new(
        req.book_id,
        Borrower::Member(req.member_id),
        Local::now().date_naive(),
        req.due_date,
    );
    registry
        .loan_repository()
        .create(event)
        .await
        .map(|loan| (StatusCode::CREATED, Json(loan.into())))
}

#[utoipa::path(
    post,
    path = "/api/student/borrow",
    request_body = StudentBorrowRequest,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 400, description = "Book is unavailable"),
        (status = 403, description = "No member profile for the user")
    )
)]
pub async fn borrow_book_as_student(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<StudentBorrowRequest>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let event = CreateLoan::new(
        req.book_id,
        Borrower::User(req.user_id),
        Local::now().date_naive(),
        req.due_date,
    );
    registry
        .loan_repository()
        .create(event)
        .await
        .map(|loan| (StatusCode::CREATED, Json(loan.into())))
}

#[utoipa::path(
    post,
    path = "/api/return",
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Loan closed", body = ReturnResponse),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn return_book(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<ReturnRequest>,
) -> AppResult<Json<ReturnResponse>> {
    let event = ReturnLoan::new(req.loan_id, Local::now().date_naive());
    registry
        .loan_repository()
        .return_loan(event)
        .await
        .map(|receipt| Json(receipt.into()))
}

#[utoipa::path(
    get,
    path = "/api/borrowed",
    responses((status = 200, description = "Outstanding loans", body = [LoanResponse]))
)]
pub async fn show_active_loans(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<LoanResponse>>> {
    registry
        .loan_repository()
        .find_active_all()
        .await
        .map(|loans| loans.into_iter().map(LoanResponse::from).collect())
        .map(Json)
}
