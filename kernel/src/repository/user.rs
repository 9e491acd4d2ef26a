use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::user::{event::CreateUser, RegisteredUser, User};

#[mockall::automock]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<RegisteredUser>;
    // メールアドレスとパスワードを照合する。失敗時は UnauthenticatedError
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User>;
}
