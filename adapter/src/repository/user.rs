use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{MemberId, UserId},
        member::Member,
        role::Role,
        user::{event::CreateUser, RegisteredUser, User},
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    conflict_on_unique_violation,
    model::{member::MemberRow, user::UserRow},
    ConnectionPool,
};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // ユーザーと会員プロフィールを1トランザクションで作成する
    async fn create(&self, event: CreateUser) -> AppResult<RegisteredUser> {
        let user_id = UserId::new();
        let member_id = MemberId::new();
        let role = Role::default();
        let role_name: &str = role.as_ref();
        let password_hash = hash_password(event.password).await?;

        let mut tx = self.db.begin().await?;

        sqlx::query!(
            r#"
                INSERT INTO users (user_id, email, password_hash, role)
                VALUES ($1, $2, $3, $4)
                ;
            "#,
            user_id as _,
            event.email,
            password_hash,
            role_name,
        )
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            conflict_on_unique_violation(e, format!("Email {} is already registered.", event.email))
        })?;

        let member: Member = sqlx::query_as!(
            MemberRow,
            r#"
                INSERT INTO members
                (member_id, user_id, name, email, joined_on, books_borrowed, outstanding_fine)
                VALUES ($1, $2, $3, $4, $5, 0, 0)
                RETURNING
                member_id,
                user_id AS "user_id: UserId",
                name,
                email,
                joined_on,
                books_borrowed,
                outstanding_fine
                ;
            "#,
            member_id as _,
            user_id as _,
            event.name,
            event.email,
            event.joined_on,
        )
        .fetch_one(&mut *tx)
        .await
        .map(Member::from)
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(RegisteredUser {
            user: User {
                id: user_id,
                email: event.email,
                role,
            },
            member,
        })
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User> {
        let row = sqlx::query_as!(
            UserRow,
            r#"
                SELECT user_id, email, password_hash, role
                FROM users
                WHERE email = $1
                ;
            "#,
            email,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or(AppError::UnauthenticatedError)?;

        if !verify_password(password.to_string(), row.password_hash.clone()).await? {
            return Err(AppError::UnauthenticatedError);
        }

        User::try_from(row)
    }
}

// bcrypt は CPU を占有するので非同期ランタイムのワーカーでは実行しない
async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await?
        .map_err(AppError::from)
}

async fn verify_password(password: String, hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await?
        .map_err(AppError::from)
}
