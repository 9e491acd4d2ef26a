use std::str::FromStr;

use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;

pub struct UserRow {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            email,
            role,
            ..
        } = value;
        let role = Role::from_str(&role)
            .map_err(|e| AppError::ConversionEntityError(format!("unknown role {role}: {e}")))?;
        Ok(Self {
            id: user_id,
            email,
            role,
        })
    }
}
