use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rstest::rstest;
use tower::ServiceExt;

use crate::{
    deserialize_json,
    helper::{api, fixture, make_router},
};
use api::model::stats::StatsResponse;
use kernel::{model::stats::LibraryStats, repository::stats::MockStatsRepository};

#[rstest]
#[tokio::test]
async fn stats_summarizes_library(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    fixture.expect_stats_repository().returning(|| {
        let mut mock = MockStatsRepository::new();
        mock.expect_summarize().returning(|| {
            Ok(LibraryStats {
                total_books: 12,
                available_copies: 30,
                active_loans: 4,
                members: 9,
            })
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api("/stats")).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let result = deserialize_json!(resp, StatsResponse);
    assert_eq!(result.total_books, 12);
    assert_eq!(result.available_copies, 30);
    assert_eq!(result.active_loans, 4);
    assert_eq!(result.members, 9);
    Ok(())
}
