use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{MemberId, UserId},
    member::{
        event::{ClearFines, CreateMember, DeleteMember, UpdateMember},
        Member,
    },
};

#[mockall::automock]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, event: CreateMember) -> AppResult<Member>;
    async fn find_all(&self) -> AppResult<Vec<Member>>;
    async fn find_by_id(&self, member_id: MemberId) -> AppResult<Option<Member>>;
    // ログインユーザーに紐づく会員プロフィールを取得
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Member>>;
    async fn update(&self, event: UpdateMember) -> AppResult<Member>;
    // 貸出中の本がある会員は削除できない
    async fn delete(&self, event: DeleteMember) -> AppResult<()>;
    // 延滞金の支払い。残高にかかわらず 0 にする
    async fn clear_fines(&self, event: ClearFines) -> AppResult<Member>;
}
