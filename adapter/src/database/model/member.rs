use chrono::NaiveDate;
use kernel::model::{
    id::{MemberId, UserId},
    member::Member,
};

pub struct MemberRow {
    pub member_id: MemberId,
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: Option<String>,
    pub joined_on: NaiveDate,
    pub books_borrowed: i32,
    pub outstanding_fine: i64,
}

impl From<MemberRow> for Member {
    fn from(value: MemberRow) -> Self {
        let MemberRow {
            member_id,
            user_id,
            name,
            email,
            joined_on,
            books_borrowed,
            outstanding_fine,
        } = value;
        Self {
            id: member_id,
            user_id,
            name,
            email,
            joined_on,
            books_borrowed,
            outstanding_fine,
        }
    }
}

pub struct BorrowerRow {
    pub member_id: MemberId,
    pub name: String,
}
