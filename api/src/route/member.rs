use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::member::{
    delete_member, pay_fines, register_member, show_member, show_member_list, show_member_loans,
    update_member,
};

pub fn build_member_routers() -> Router<AppRegistry> {
    let members_routers = Router::new()
        .route("/", get(show_member_list).post(register_member))
        .route(
            "/:member_id",
            get(show_member).put(update_member).delete(delete_member),
        )
        .route("/:member_id/borrowed", get(show_member_loans))
        .route("/:member_id/pay-fines", post(pay_fines));

    Router::new().nest("/members", members_routers)
}
