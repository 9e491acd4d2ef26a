use chrono::NaiveDate;

use super::{
    id::{MemberId, UserId},
    loan::Loan,
};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: Option<String>,
    pub joined_on: NaiveDate,
    pub books_borrowed: i32,
    // 未払いの延滞金。返却のたびに加算される
    pub outstanding_fine: i64,
}

// セルフサービス用：会員情報と貸出中の一覧
#[derive(Debug)]
pub struct MemberProfile {
    pub member: Member,
    pub loans: Vec<Loan>,
}
