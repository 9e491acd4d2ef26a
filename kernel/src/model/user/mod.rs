use super::{id::UserId, member::Member, role::Role};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

// 登録時はユーザーと会員プロフィールを同時に作る
#[derive(Debug)]
pub struct RegisteredUser {
    pub user: User,
    pub member: Member,
}
