use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::json;
use shared::error::AppError;
use tower::ServiceExt;

use crate::{
    deserialize_json,
    helper::{api, fixture, make_router, ErrorBody, TestRequestExt},
};
use api::model::{
    member::MemberProfileResponse,
    user::{RegisteredUserResponse, UserResponse},
};
use kernel::{
    model::{
        id::{MemberId, UserId},
        member::Member,
        role::Role,
        user::{RegisteredUser, User},
    },
    repository::{
        loan::MockLoanRepository, member::MockMemberRepository, user::MockUserRepository,
    },
};

#[rstest]
#[tokio::test]
async fn register_returns_user_with_member_name(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    fixture.expect_user_repository().returning(|| {
        let mut mock = MockUserRepository::new();
        mock.expect_create().returning(|event| {
            let user = User {
                id: UserId::new(),
                email: event.email,
                role: Role::Student,
            };
            Ok(RegisteredUser {
                member: Member {
                    id: MemberId::new(),
                    user_id: Some(user.id),
                    name: event.name,
                    email: Some(user.email.clone()),
                    joined_on: event.joined_on,
                    books_borrowed: 0,
                    outstanding_fine: 0,
                },
                user,
            })
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let body = json!({"name": "Alan Turing", "email": "alan@example.com", "password": "enigma"});
    let req = Request::post(&api("/register")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let result = deserialize_json!(resp, RegisteredUserResponse);
    assert_eq!(result.email, "alan@example.com");
    assert_eq!(result.role, "student");
    assert_eq!(result.name, "Alan Turing");
    Ok(())
}

#[rstest]
#[case(json!({"name": "Alan Turing", "email": "alan@example.com"}))]
#[case(json!({"name": "Alan Turing", "password": "enigma"}))]
#[case(json!({"email": "alan@example.com", "password": "enigma"}))]
#[tokio::test]
async fn register_rejects_missing_fields(
    fixture: registry::MockAppRegistryExt,
    #[case] body: serde_json::Value,
) -> anyhow::Result<()> {
    let app: axum::Router = make_router(fixture);

    let req = Request::post(&api("/register")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn register_duplicate_email_is_rejected(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    fixture.expect_user_repository().returning(|| {
        let mut mock = MockUserRepository::new();
        mock.expect_create().returning(|event| {
            Err(AppError::Conflict(format!(
                "Email {} is already registered.",
                event.email
            )))
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let body = json!({"name": "Alan Turing", "email": "alan@example.com", "password": "enigma"});
    let req = Request::post(&api("/register")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[rstest]
#[case("enigma", StatusCode::OK)]
#[case("bombe", StatusCode::UNAUTHORIZED)]
#[tokio::test]
async fn login_verifies_credentials(
    mut fixture: registry::MockAppRegistryExt,
    #[case] password: &'static str,
    #[case] status_code: StatusCode,
) -> anyhow::Result<()> {
    fixture.expect_user_repository().returning(|| {
        let mut mock = MockUserRepository::new();
        mock.expect_verify_user().returning(|email, password| {
            if password == "enigma" {
                Ok(User {
                    id: UserId::new(),
                    email: email.to_string(),
                    role: Role::Admin,
                })
            } else {
                Err(AppError::UnauthenticatedError)
            }
        });
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let body = json!({"email": "alan@example.com", "password": password});
    let req = Request::post(&api("/login")).json(body)?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), status_code);

    if status_code == StatusCode::OK {
        let result = deserialize_json!(resp, UserResponse);
        assert_eq!(result.email, "alan@example.com");
        assert_eq!(result.role, "admin");
    }
    Ok(())
}

#[rstest]
#[tokio::test]
async fn my_profile_includes_outstanding_loans(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    let user_id = UserId::new();
    let member_id = MemberId::new();

    fixture.expect_member_repository().returning(move || {
        let mut mock = MockMemberRepository::new();
        mock.expect_find_by_user_id()
            .withf(move |id| *id == user_id)
            .returning(move |user_id| {
                Ok(Some(Member {
                    id: member_id,
                    user_id: Some(user_id),
                    name: "Alan Turing".to_string(),
                    email: None,
                    joined_on: NaiveDate::from_ymd_opt(2024, 6, 23).unwrap(),
                    books_borrowed: 0,
                    outstanding_fine: 200,
                }))
            });
        Arc::new(mock)
    });
    fixture.expect_loan_repository().returning(move || {
        let mut mock = MockLoanRepository::new();
        mock.expect_find_active_by_member_id()
            .withf(move |id| *id == member_id)
            .returning(|_| Ok(vec![]));
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api(&format!("/my-profile/{user_id}"))).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let result = deserialize_json!(resp, MemberProfileResponse);
    assert_eq!(result.member.id, member_id);
    assert_eq!(result.member.outstanding_fines, 200);
    assert!(result.loans.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn my_profile_without_member_is_not_found(
    mut fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    fixture.expect_member_repository().returning(|| {
        let mut mock = MockMemberRepository::new();
        mock.expect_find_by_user_id().returning(|_| Ok(None));
        Arc::new(mock)
    });

    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api(&format!("/my-profile/{}", UserId::new()))).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn my_profile_with_malformed_user_id_is_rejected_as_json(
    fixture: registry::MockAppRegistryExt,
) -> anyhow::Result<()> {
    let app: axum::Router = make_router(fixture);

    let req = Request::get(&api("/my-profile/ferris")).body(Body::empty())?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let error = deserialize_json!(resp, ErrorBody);
    assert!(error.message.contains("UUID"), "{}", error.message);
    Ok(())
}
