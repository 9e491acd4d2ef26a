use garde::Validate;
use kernel::model::{
    id::UserId,
    user::{RegisteredUser, User},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(value_type = String)]
    pub id: UserId,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User { id, email, role } = value;
        Self {
            id,
            email,
            role: role.as_ref().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserResponse {
    #[schema(value_type = String)]
    pub id: UserId,
    pub email: String,
    pub role: String,
    pub name: String,
}

impl From<RegisteredUser> for RegisteredUserResponse {
    fn from(value: RegisteredUser) -> Self {
        let RegisteredUser { user, member } = value;
        Self {
            id: user.id,
            email: user.email,
            role: user.role.as_ref().to_string(),
            name: member.name,
        }
    }
}
