use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Local;
use kernel::model::{
    id::MemberId,
    member::event::{ClearFines, DeleteMember},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{PathParam, ValidatedJson},
    model::{
        loan::LoanResponse,
        member::{
            CreateMemberRequest, CreateMemberRequestWithDate, MemberResponse,
            UpdateMemberRequest, UpdateMemberRequestWithId,
        },
    },
};

#[utoipa::path(
    post,
    path = "/api/members",
    request_body = CreateMemberRequest,
    responses((status = 201, description = "Created", body = MemberResponse), (status = 400, description = "Invalid input"))
)]
pub async fn register_member(
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<CreateMemberRequest>,
) -> AppResult<(StatusCode, Json<MemberResponse>)> {
    let event = CreateMemberRequestWithDate::new(req, Local::now().date_naive());
    registry
        .member_repository()
        .create(event.into())
        .await
        .map(|member| (StatusCode::CREATED, Json(member.into())))
}

#[utoipa::path(get, path = "/api/members", responses((status = 200, description = "OK", body = [MemberResponse])))]
pub async fn show_member_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<MemberResponse>>> {
    registry
        .member_repository()
        .find_all()
        .await
        .map(|members| members.into_iter().map(MemberResponse::from).collect())
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}",
    params(("member_id" = String, Path, description = "Member ID")),
    responses((status = 200, description = "OK", body = MemberResponse), (status = 404, description = "Not found"))
)]
pub async fn show_member(
    PathParam(member_id): PathParam<MemberId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MemberResponse>> {
    registry
        .member_repository()
        .find_by_id(member_id)
        .await?
        .map(|member| Json(member.into()))
        .ok_or_else(|| AppError::EntityNotFound(format!("Member ({member_id}) was not found.")))
}

#[utoipa::path(
    put,
    path = "/api/members/{member_id}",
    params(("member_id" = String, Path, description = "Member ID")),
    request_body = UpdateMemberRequest,
    responses((status = 200, description = "OK", body = MemberResponse), (status = 400, description = "Invalid input"), (status = 404, description = "Not found"))
)]
pub async fn update_member(
    PathParam(member_id): PathParam<MemberId>,
    State(registry): State<AppRegistry>,
    ValidatedJson(req): ValidatedJson<UpdateMemberRequest>,
) -> AppResult<Json<MemberResponse>> {
    let update_member = UpdateMemberRequestWithId::new(member_id, req);
    registry
        .member_repository()
        .update(update_member.into())
        .await
        .map(|member| Json(member.into()))
}

#[utoipa::path(
    delete,
    path = "/api/members/{member_id}",
    params(("member_id" = String, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Member has outstanding loans"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_member(
    PathParam(member_id): PathParam<MemberId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .member_repository()
        .delete(DeleteMember::new(member_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/members/{member_id}/borrowed",
    params(("member_id" = String, Path, description = "Member ID")),
    responses((status = 200, description = "OK", body = [LoanResponse]))
)]
pub async fn show_member_loans(
    PathParam(member_id): PathParam<MemberId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<LoanResponse>>> {
    registry
        .loan_repository()
        .find_active_by_member_id(member_id)
        .await
        .map(|loans| loans.into_iter().map(LoanResponse::from).collect())
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/members/{member_id}/pay-fines",
    params(("member_id" = String, Path, description = "Member ID")),
    responses((status = 200, description = "OK", body = MemberResponse), (status = 404, description = "Not found"))
)]
pub async fn pay_fines(
    PathParam(member_id): PathParam<MemberId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MemberResponse>> {
    registry
        .member_repository()
        .clear_fines(ClearFines::new(member_id))
        .await
        .map(|member| Json(member.into()))
}
