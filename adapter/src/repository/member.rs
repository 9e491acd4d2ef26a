use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{MemberId, UserId},
        member::{
            event::{ClearFines, CreateMember, DeleteMember, UpdateMember},
            Member,
        },
    },
    repository::member::MemberRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::member::MemberRow, ConnectionPool};

#[derive(new)]
pub struct MemberRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MemberRepository for MemberRepositoryImpl {
    async fn create(&self, event: CreateMember) -> AppResult<Member> {
        let member_id = MemberId::new();
        sqlx::query_as!(
            MemberRow,
            r#"
                INSERT INTO members
                (member_id, name, email, joined_on, books_borrowed, outstanding_fine)
                VALUES ($1, $2, $3, $4, 0, 0)
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
            event.name,
            event.email,
            event.joined_on,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map(Member::from)
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all(&self) -> AppResult<Vec<Member>> {
        sqlx::query_as!(
            MemberRow,
            r#"
                SELECT
                member_id,
                user_id AS "user_id: UserId",
                name,
                email,
                joined_on,
                books_borrowed,
                outstanding_fine
                FROM members
                ORDER BY joined_on ASC, name ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Member::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, member_id: MemberId) -> AppResult<Option<Member>> {
        sqlx::query_as!(
            MemberRow,
            r#"
                SELECT
                member_id,
                user_id AS "user_id: UserId",
                name,
                email,
                joined_on,
                books_borrowed,
                outstanding_fine
                FROM members
                WHERE member_id = $1
                ;
            "#,
            member_id as _,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Member::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Member>> {
        sqlx::query_as!(
            MemberRow,
            r#"
                SELECT
                member_id,
                user_id AS "user_id: UserId",
                name,
                email,
                joined_on,
                books_borrowed,
                outstanding_fine
                FROM members
                WHERE user_id = $1
                ;
            "#,
            user_id as _,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Member::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateMember) -> AppResult<Member> {
        sqlx::query_as!(
            MemberRow,
            r#"
                UPDATE members SET
                name = $2,
                email = $3
                WHERE member_id = $1
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
            event.member_id as _,
            event.name,
            event.email,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Member::from)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("Member ({}) was not found.", event.member_id))
        })
    }

    async fn delete(&self, event: DeleteMember) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let locked = sqlx::query_scalar!(
            "SELECT member_id FROM members WHERE member_id = $1 FOR UPDATE",
            event.member_id as _,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if locked.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "Member ({}) was not found.",
                event.member_id
            )));
        }

        let active_loans = sqlx::query_scalar!(
            r#"SELECT COUNT(*) AS "count!" FROM loans WHERE member_id = $1"#,
            event.member_id as _,
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if active_loans > 0 {
            return Err(AppError::Conflict(format!(
                "Member ({}) cannot be deleted while {} loan(s) are outstanding.",
                event.member_id, active_loans
            )));
        }

        let res = sqlx::query!(
            "DELETE FROM members WHERE member_id = $1",
            event.member_id as _
        )
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No member record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn clear_fines(&self, event: ClearFines) -> AppResult<Member> {
        sqlx::query_as!(
            MemberRow,
            r#"
                UPDATE members SET outstanding_fine = 0
                WHERE member_id = $1
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
            event.member_id as _,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Member::from)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("Member ({}) was not found.", event.member_id))
        })
    }
}
