use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{BookId, LoanId, MemberId, UserId},
    loan::{Loan, ReturnReceipt},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    #[garde(skip)]
    #[schema(value_type = String)]
    pub book_id: BookId,
    #[garde(skip)]
    #[schema(value_type = String)]
    pub member_id: MemberId,
    #[garde(skip)]
    pub due_date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentBorrowRequest {
    #[garde(skip)]
    #[schema(value_type = String)]
    pub book_id: BookId,
    #[garde(skip)]
    pub due_date: NaiveDate,
    #[garde(skip)]
    #[schema(value_type = String)]
    pub user_id: UserId,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[garde(skip)]
    #[schema(value_type = String)]
    pub loan_id: LoanId,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    #[schema(value_type = String)]
    pub id: LoanId,
    #[schema(value_type = String)]
    pub book_id: BookId,
    #[schema(value_type = String)]
    pub member_id: MemberId,
    pub book_title: String,
    pub member_name: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl From<Loan> for LoanResponse {
    fn from(value: Loan) -> Self {
        let Loan {
            id,
            book_id,
            member_id,
            book_title,
            member_name,
            borrowed_on,
            due_on,
        } = value;
        Self {
            id,
            book_id,
            member_id,
            book_title,
            member_name,
            borrow_date: borrowed_on,
            due_date: due_on,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnResponse {
    pub message: String,
    pub fine: i64,
    pub days_overdue: i64,
}

impl From<ReturnReceipt> for ReturnResponse {
    fn from(value: ReturnReceipt) -> Self {
        Self {
            message: value.message(),
            fine: value.fine.amount,
            days_overdue: value.fine.days,
        }
    }
}
