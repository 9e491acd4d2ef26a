use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::MemberId;

#[derive(Debug, new)]
pub struct CreateMember {
    pub name: String,
    pub email: Option<String>,
    pub joined_on: NaiveDate,
}

#[derive(Debug, new)]
pub struct UpdateMember {
    pub member_id: MemberId,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, new)]
pub struct DeleteMember {
    pub member_id: MemberId,
}

#[derive(Debug, new)]
pub struct ClearFines {
    pub member_id: MemberId,
}
