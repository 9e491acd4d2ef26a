use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Days, Local, NaiveDate};
use rstest::rstest;
use serde_json::json;
use shared::error::AppError;
use tower::ServiceExt;

use crate::{
    deserialize_json,
    helper::{api, fixture, make_router, ErrorBody, TestRequestExt},
};
use api::model::loan::{LoanResponse, ReturnResponse};
use kernel::{
    model::{
        id::{BookId, LoanId, MemberId, UserId},
        loan::{event::Borrower, Loan, OverdueFine, ReturnReceipt},
    },
    repository::loan::MockLoanRepository,
};

fn sample_loan(book_id: BookId, member_id: MemberId, due_on: NaiveDate) -> Loan {
    Loan {
        id: LoanId::new(),
        book_id,
        member_id,
        book_title: "The Pragmatic Programmer".to_string(),
        member_name: "Barbara Liskov".to_string(),
        borrowed_on: Local::now().date_naive(),
        due_on,
    }
}

#[rstest]
#[tokio::test]
async fn borrow_book_creates_loan(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    let book_id = BookId::new();
    let member_id = MemberId::new();
    let due_on = NaiveDate::from_ymd_opt(2030, 1, 31).unwrap();

    fixture.expect_loan_repository().returning(move || {
        let mut mock = MockLoanRepository::new();
        mock.expect_create()
            .withf(move |event| {
                event.book_id == book_id
                    && event.borrower == Borrower::Member(member_id)
                    && event.due_on == due_on
            })
            .returning(|event| {
                let Borrower::Member(member_id) = event.borrower else {
                    unreachable!()
                };
                Ok(sample_loan(event.book_id, member_id, event.due_on))
            });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let body = json!({"bookId": book_id, "memberId": member_id, "dueDate": "2030-01-31"});
    let req = Request::post(&api("/borrow")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let loan = deserialize_json!(resp, LoanResponse);
    assert_eq!(loan.book_id, book_id);
    assert_eq!(loan.member_id, member_id);
    assert_eq!(loan.due_date, due_on);
    assert_eq!(loan.book_title, "The Pragmatic Programmer");
    Ok(())
}

#[rstest]
#[case(
    "/borrow",
    json!({"bookId": BookId::new(), "memberId": MemberId::new(), "dueDate": "2030-01-31"}),
    AppError::Conflict("Book is unavailable.".into()),
    StatusCode::BAD_REQUEST
)]
#[case(
    "/borrow",
    json!({"bookId": BookId::new(), "memberId": MemberId::new(), "dueDate": "2030-01-31"}),
    AppError::EntityNotFound("Member was not found.".into()),
    StatusCode::NOT_FOUND
)]
#[case(
    "/student/borrow",
    json!({"bookId": BookId::new(), "userId": UserId::new(), "dueDate": "2030-01-31"}),
    AppError::ForbiddenOperation("No member profile is linked to user.".into()),
    StatusCode::FORBIDDEN
)]
#[tokio::test]
async fn borrow_failures_map_to_status(
    mut fixture: registry::MockAppRegistryExt,
    #[case] path: &str,
    #[case] body: serde_json::Value,
    #[case] error: AppError,
    #[case] status_code: StatusCode,
) -> anyhow::Result<()> {
    let message = error.to_string();
    let mut error = Some(error);
    let mut mock = MockLoanRepository::new();
    mock.expect_create()
        .times(1)
        .returning(move |_| Err(error.take().expect("called once")));
    let mock = Arc::new(mock);
    fixture
        .expect_loan_repository()
        .returning(move || mock.clone());

    let app: axum::Router = make_router(fixture);

    let req = Request::post(&api(path)).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), status_code);

    let result = deserialize_json!(resp, ErrorBody);
    assert_eq!(result.message, message);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn student_borrow_resolves_by_user(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    let user_id = UserId::new();

    fixture.expect_loan_repository().returning(move || {
        let mut mock = MockLoanRepository::new();
        mock.expect_create()
            .withf(move |event| event.borrower == Borrower::User(user_id))
            .returning(|event| Ok(sample_loan(event.book_id, MemberId::new(), event.due_on)));
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let body = json!({"bookId": BookId::new(), "userId": user_id, "dueDate": "2030-01-31"});
    let req = Request::post(&api("/student/borrow")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    Ok(())
}

#[rstest]
#[case(json!({"bookId": BookId::new(), "memberId": MemberId::new()}))]
#[case(json!({"bookId": BookId::new(), "memberId": MemberId::new(), "dueDate": "31/01/2030"}))]
#[case(json!({"bookId": "nope", "memberId": MemberId::new(), "dueDate": "2030-01-31"}))]
#[tokio::test]
async fn borrow_rejects_malformed_body(
    fixture: registry::MockAppRegistryExt,
    #[case] body: serde_json::Value,
) -> anyhow::Result<()> {
    let app: axum::Router = make_router(fixture);

    let req = Request::post(&api("/borrow")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[rstest]
#[case(0, 0, "Book returned successfully.")]
#[case(1, 100, "Book returned with a fine of 100 for 1 day(s) overdue.")]
#[case(3, 300, "Book returned with a fine of 300 for 3 day(s) overdue.")]
#[tokio::test]
async fn return_book_reports_fine(
    mut fixture: registry::MockAppRegistryExt,
    #[case] days_late: u64,
    #[case] expected_fine: i64,
    #[case] expected_message: &str,
) -> anyhow::Result<()> {
    let loan_id = LoanId::new();

    fixture.expect_loan_repository().returning(move || {
        let mut mock = MockLoanRepository::new();
        mock.expect_return_loan()
            .withf(move |event| event.loan_id == loan_id)
            .returning(move |event| {
                let due_on = event.returned_on - Days::new(days_late);
                let loan = sample_loan(BookId::new(), MemberId::new(), due_on);
                Ok(ReturnReceipt {
                    loan,
                    fine: OverdueFine::assess(due_on, event.returned_on),
                })
            });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::post(&api("/return")).json(json!({"loanId": loan_id}))?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let result = deserialize_json!(resp, ReturnResponse);
    assert_eq!(result.fine, expected_fine);
    assert_eq!(result.days_overdue, days_late as i64);
    assert_eq!(result.message, expected_message);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn return_unknown_loan_is_not_found(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    fixture.expect_loan_repository().returning(|| {
        let mut mock = MockLoanRepository::new();
        mock.expect_return_loan().returning(|event| {
            Err(AppError::EntityNotFound(format!(
                "Loan ({}) was not found.",
                event.loan_id
            )))
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::post(&api("/return")).json(json!({"loanId": LoanId::new()}))?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn show_active_loans_lists_all(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    let due_on = NaiveDate::from_ymd_opt(2030, 1, 31).unwrap();

    fixture.expect_loan_repository().returning(move || {
        let mut mock = MockLoanRepository::new();
        mock.expect_find_active_all().returning(move || {
            Ok(vec![
                sample_loan(BookId::new(), MemberId::new(), due_on),
                sample_loan(BookId::new(), MemberId::new(), due_on),
            ])
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api("/borrowed")).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let result = deserialize_json!(resp, Vec<LoanResponse>);
    assert_eq!(result.len(), 2);
    Ok(())
}
