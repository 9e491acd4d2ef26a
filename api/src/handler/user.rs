use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Local;
use kernel::model::{id::UserId, member::MemberProfile, user::event::CreateUser};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{PathParam, ValidatedJson},
    model::{
        member::MemberProfileResponse,
        user::{LoginRequest, RegisterRequest, RegisteredUserResponse, UserResponse},
    },
};

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User and member profile created", body = RegisteredUserResponse),
        (status = 400, description = "Missing fields or email already registered")
    )
)]
pub async fn register(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisteredUserResponse>)> {
    let RegisterRequest {
        name,
        email,
        password,
    } = req;
    let event = CreateUser::new(name, email, password, Local::now().date_naive());
    registry
        .user_repository()
        .create(event)
        .await
        .map(|registered| (StatusCode::CREATED, Json(registered.into())))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .verify_user(&req.email, &req.password)
        .await
        .map(|user| Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/api/my-profile/{user_id}",
    params(("user_id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Member profile with outstanding loans", body = MemberProfileResponse),
        (status = 404, description = "No member profile for the user")
    )
)]
pub async fn show_my_profile(
    PathParam(user_id): PathParam<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MemberProfileResponse>> {
    let member = registry
        .member_repository()
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("No member profile found for user ({user_id})."))
        })?;
    let loans = registry
        .loan_repository()
        .find_active_by_member_id(member.id)
        .await?;
    Ok(Json(MemberProfile { member, loans }.into()))
}
