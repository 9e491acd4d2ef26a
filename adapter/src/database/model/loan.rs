use chrono::NaiveDate;
use kernel::model::{
    id::{BookId, LoanId, MemberId},
    loan::Loan,
};

pub struct LoanRow {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub book_title: String,
    pub member_name: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl From<LoanRow> for Loan {
    fn from(value: LoanRow) -> Self {
        let LoanRow {
            loan_id,
            book_id,
            member_id,
            book_title,
            member_name,
            borrowed_on,
            due_on,
        } = value;
        Self {
            id: loan_id,
            book_id,
            member_id,
            book_title,
            member_name,
            borrowed_on,
            due_on,
        }
    }
}
