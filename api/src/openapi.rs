use axum::Json;
use utoipa::OpenApi;

use crate::{handler, model};

#[derive(OpenApi)]
#[openapi(
    info(title = "Rusty Library API"),
    paths(
        handler::health::health_check,
        handler::health::health_check_db,
        handler::book::register_book,
        handler::book::show_book_list,
        handler::book::show_book,
        handler::book::update_book,
        handler::book::delete_book,
        handler::book::show_book_loans,
        handler::member::register_member,
        handler::member::show_member_list,
        handler::member::show_member,
        handler::member::update_member,
        handler::member::delete_member,
        handler::member::show_member_loans,
        handler::member::pay_fines,
        handler::loan::borrow_book,
        handler::loan::borrow_book_as_student,
        handler::loan::return_book,
        handler::loan::show_active_loans,
        handler::user::register,
        handler::user::login,
        handler::user::show_my_profile,
        handler::stats::show_stats,
    ),
    components(schemas(
        model::book::CreateBookRequest,
        model::book::UpdateBookRequest,
        model::book::BookResponse,
        model::member::CreateMemberRequest,
        model::member::UpdateMemberRequest,
        model::member::MemberResponse,
        model::member::MemberProfileResponse,
        model::loan::BorrowRequest,
        model::loan::StudentBorrowRequest,
        model::loan::ReturnRequest,
        model::loan::LoanResponse,
        model::loan::ReturnResponse,
        model::user::RegisterRequest,
        model::user::LoginRequest,
        model::user::UserResponse,
        model::user::RegisteredUserResponse,
        model::stats::StatsResponse,
    ))
)]
pub struct ApiDoc;

pub async fn show_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
