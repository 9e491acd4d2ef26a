use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::openapi::show_openapi;

pub mod book;
pub mod health;
pub mod loan;
pub mod member;
pub mod stats;
pub mod user;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(book::build_book_routers())
        .merge(member::build_member_routers())
        .merge(loan::build_loan_routers())
        .merge(user::build_user_routers())
        .merge(stats::build_stats_routers())
        .merge(health::build_health_check_routers())
        .route("/openapi.json", get(show_openapi));
    Router::new().nest("/api", router)
}
