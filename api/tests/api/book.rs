use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use rstest::rstest;
use serde_json::json;
use shared::error::AppError;
use tower::ServiceExt;

use crate::{
    deserialize_json,
    helper::{api, fixture, make_router, ErrorBody, TestRequestExt},
};
use api::model::book::BookResponse;
use kernel::{
    model::{book::Book, id::BookId},
    repository::book::MockBookRepository,
};

fn sample_book(id: BookId, copies: i32, available: i32) -> Book {
    Book {
        id,
        title: "Rust for Rustaceans".to_string(),
        author: "Jon Gjengset".to_string(),
        isbn: Some("978-1718501850".to_string()),
        genre: Some("Programming".to_string()),
        year: Some(2021),
        copies,
        available,
        cover_url: None,
    }
}

#[rstest]
#[case("/books", None)]
#[case("/books?q=Rust", Some("Rust"))]
#[case("/books?q=2021", Some("2021"))]
#[case("/books?q=", None)]
#[tokio::test]
async fn show_book_list_with_query(
    mut fixture: registry::MockAppRegistryExt,
    #[case] path: &str,
    #[case] expected_query: Option<&'static str>,
) -> anyhow::Result<()> {
    let book_id = BookId::new();

    fixture.expect_book_repository().returning(move || {
        let mut mock = MockBookRepository::new();
        mock.expect_find_all()
            .withf(move |opt| opt.query.as_deref() == expected_query)
            .returning(move |_| Ok(vec![sample_book(book_id, 2, 2)]));
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api(path)).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let result = deserialize_json!(resp, Vec<BookResponse>);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, book_id);
    Ok(())
}

#[rstest]
#[case(json!({"title": "Dune", "author": "Frank Herbert", "copies": 3}), StatusCode::CREATED)]
#[case(json!({"author": "Frank Herbert", "copies": 3}), StatusCode::BAD_REQUEST)]
#[case(json!({"title": "Dune", "copies": 3}), StatusCode::BAD_REQUEST)]
#[case(json!({"title": "Dune", "author": "Frank Herbert"}), StatusCode::BAD_REQUEST)]
#[case(json!({"title": "", "author": "Frank Herbert", "copies": 3}), StatusCode::BAD_REQUEST)]
#[case(json!({"title": "Dune", "author": "Frank Herbert", "copies": 0}), StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn register_book_validates_required_fields(
    mut fixture: registry::MockAppRegistryExt,
    #[case] body: serde_json::Value,
    #[case] status_code: StatusCode,
) -> anyhow::Result<()> {
    fixture.expect_book_repository().returning(|| {
        let mut mock = MockBookRepository::new();
        mock.expect_create().returning(|event| {
            Ok(Book {
                id: BookId::new(),
                title: event.title,
                author: event.author,
                isbn: event.isbn,
                genre: event.genre,
                year: event.year,
                copies: event.copies,
                available: event.copies,
                cover_url: event.cover_url,
            })
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::post(&api("/books")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), status_code);

    if status_code == StatusCode::CREATED {
        let result = deserialize_json!(resp, BookResponse);
        assert_eq!(result.copies, 3);
        assert_eq!(result.available, 3);
    }
    Ok(())
}

#[rstest]
#[tokio::test]
async fn show_missing_book_is_not_found(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    fixture.expect_book_repository().returning(|| {
        let mut mock = MockBookRepository::new();
        mock.expect_find_by_id().returning(|_| Ok(None));
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api(&format!("/books/{}", BookId::new()))).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_book_below_lent_out_copies_is_rejected(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    let book_id = BookId::new();

    fixture.expect_book_repository().returning(move || {
        let mut mock = MockBookRepository::new();
        mock.expect_update()
            .withf(move |event| event.book_id == book_id && event.copies == 1)
            .returning(|event| {
                // 3冊すべて貸出中の本を1冊に減らそうとする
                sample_book(event.book_id, 3, 0)
                    .recompute_available(event.copies)
                    .map(|available| sample_book(event.book_id, event.copies, available))
            });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let body = json!({"title": "Rust for Rustaceans", "author": "Jon Gjengset", "copies": 1});
    let req = Request::put(&api(&format!("/books/{book_id}"))).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error = deserialize_json!(resp, ErrorBody);
    assert!(error.message.contains("currently borrowed"));
    Ok(())
}

#[rstest]
#[case(Ok(()), StatusCode::NO_CONTENT)]
#[case(Err(AppError::Conflict("Book has outstanding loans.".into())), StatusCode::BAD_REQUEST)]
#[case(Err(AppError::EntityNotFound("Book was not found.".into())), StatusCode::NOT_FOUND)]
#[tokio::test]
async fn delete_book_maps_outcome_to_status(
    mut fixture: registry::MockAppRegistryExt,
    #[case] outcome: Result<(), AppError>,
    #[case] status_code: StatusCode,
) -> anyhow::Result<()> {
    let mut outcome = Some(outcome);
    let mut mock = MockBookRepository::new();
    mock.expect_delete()
        .times(1)
        .returning(move |_| outcome.take().unwrap_or(Ok(())));
    let mock = Arc::new(mock);
    fixture
        .expect_book_repository()
        .returning(move || mock.clone());

    let app: axum::Router = make_router(fixture);

    let req = Request::delete(&api(&format!("/books/{}", BookId::new()))).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), status_code);
    Ok(())
}

#[rstest]
#[case(Request::get(api("/books/not-a-uuid")))]
#[case(Request::get(api("/books/not-a-uuid/borrowed")))]
#[case(Request::delete(api("/books/12345")))]
#[tokio::test]
async fn malformed_book_id_is_rejected_as_json(
    fixture: registry::MockAppRegistryExt,
    #[case] req: axum::http::request::Builder,
) -> anyhow::Result<()> {
    let app: axum::Router = make_router(fixture);

    let resp = app.oneshot(req.body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error = deserialize_json!(resp, ErrorBody);
    assert!(error.message.contains("UUID"), "{}", error.message);
    Ok(())
}
