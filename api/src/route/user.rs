use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{login, register, show_my_profile};

pub fn build_user_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/my-profile/:user_id", get(show_my_profile))
}
