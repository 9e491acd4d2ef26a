use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{MemberId, UserId},
    member::{
        event::{CreateMember, UpdateMember},
        Member, MemberProfile,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{deserialize_non_blank, loan::LoanResponse};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    #[garde(email)]
    pub email: Option<String>,
}

// 入会日は登録日（サーバーの現地日付）
#[derive(new)]
pub struct CreateMemberRequestWithDate(CreateMemberRequest, NaiveDate);

impl From<CreateMemberRequestWithDate> for CreateMember {
    fn from(value: CreateMemberRequestWithDate) -> Self {
        let CreateMemberRequestWithDate(CreateMemberRequest { name, email }, joined_on) = value;
        CreateMember::new(name, email, joined_on)
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    #[garde(email)]
    pub email: Option<String>,
}

#[derive(new)]
pub struct UpdateMemberRequestWithId(MemberId, UpdateMemberRequest);

impl From<UpdateMemberRequestWithId> for UpdateMember {
    fn from(value: UpdateMemberRequestWithId) -> Self {
        let UpdateMemberRequestWithId(member_id, UpdateMemberRequest { name, email }) = value;
        UpdateMember::new(member_id, name, email)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    #[schema(value_type = String)]
    pub id: MemberId,
    #[schema(value_type = Option<String>)]
    pub user_id: Option<UserId>,
    pub name: String,
    pub email: Option<String>,
    pub join_date: NaiveDate,
    pub books_borrowed: i32,
    pub outstanding_fines: i64,
}

impl From<Member> for MemberResponse {
    fn from(value: Member) -> Self {
        let Member {
            id,
            user_id,
            name,
            email,
            joined_on,
            books_borrowed,
            outstanding_fine,
        } = value;
        Self {
            id,
            user_id,
            name,
            email,
            join_date: joined_on,
            books_borrowed,
            outstanding_fines: outstanding_fine,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfileResponse {
    pub member: MemberResponse,
    pub loans: Vec<LoanResponse>,
}

impl From<MemberProfile> for MemberProfileResponse {
    fn from(value: MemberProfile) -> Self {
        let MemberProfile { member, loans } = value;
        Self {
            member: member.into(),
            loans: loans.into_iter().map(LoanResponse::from).collect(),
        }
    }
}
