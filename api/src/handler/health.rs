use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;

#[utoipa::path(get, path = "/api/health", responses((status = 200, description = "Server is up")))]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[utoipa::path(
    get,
    path = "/api/health/db",
    responses(
        (status = 200, description = "Database is reachable"),
        (status = 500, description = "Database is unreachable")
    )
)]
pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
