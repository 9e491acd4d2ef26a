use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::{BookId, LoanId, MemberId, UserId};

// 貸出の借り手の指定方法。管理画面からは会員ID、セルフサービスではユーザーIDで指定する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Borrower {
    Member(MemberId),
    User(UserId),
}

#[derive(Debug, new)]
pub struct CreateLoan {
    pub book_id: BookId,
    pub borrower: Borrower,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

#[derive(Debug, new)]
pub struct ReturnLoan {
    pub loan_id: LoanId,
    pub returned_on: NaiveDate,
}
