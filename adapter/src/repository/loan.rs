use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::{BookId, LoanId, MemberId},
        loan::{
            event::{Borrower, CreateLoan, ReturnLoan},
            Loan, OverdueFine, ReturnReceipt,
        },
    },
    repository::loan::LoanRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{book::BookAvailabilityRow, loan::LoanRow, member::BorrowerRow},
    ConnectionPool,
};

#[derive(new)]
pub struct LoanRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl LoanRepository for LoanRepositoryImpl {
    // 貸出
    async fn create(&self, event: CreateLoan) -> AppResult<Loan> {
        let mut tx = self.db.begin().await?;

        let borrower = self.find_borrower(&mut tx, event.borrower).await?;

        // 蔵書の行を排他ロックしてから貸出可能数を読み直す。
        // 同じ本を同時に借りようとするリクエストはここで直列化される
        let book = sqlx::query_as!(
            BookAvailabilityRow,
            r#"
                SELECT book_id, title, available
                FROM books
                WHERE book_id = $1
                FOR UPDATE
                ;
            "#,
            event.book_id as _,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let book = match book {
            Some(book) if book.available > 0 => book,
            _ => {
                return Err(AppError::Conflict(format!(
                    "Book ({}) is unavailable.",
                    event.book_id
                )))
            }
        };

        // ロックの取得順は books -> members で返却処理と揃える
        let res = sqlx::query!(
            "UPDATE books SET available = available - 1 WHERE book_id = $1",
            book.book_id as _,
        )
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No book record has been updated".into(),
            ));
        }

        let res = sqlx::query!(
            "UPDATE members SET books_borrowed = books_borrowed + 1 WHERE member_id = $1",
            borrower.member_id as _,
        )
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No member record has been updated".into(),
            ));
        }

        let loan_id = LoanId::new();
        let loan = sqlx::query_as!(
            LoanRow,
            r#"
                INSERT INTO loans
                (loan_id, book_id, member_id, book_title, member_name, borrowed_on, due_on)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING loan_id, book_id, member_id, book_title, member_name, borrowed_on, due_on
                ;
            "#,
            loan_id as _,
            book.book_id as _,
            borrower.member_id as _,
            book.title,
            borrower.name,
            event.borrowed_on,
            event.due_on,
        )
        .fetch_one(&mut *tx)
        .await
        .map(Loan::from)
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            loan.id = %loan.id,
            book.id = %loan.book_id,
            member.id = %loan.member_id,
            due_on = %loan.due_on,
            "book borrowed"
        );

        Ok(loan)
    }

    // 返却
    async fn return_loan(&self, event: ReturnLoan) -> AppResult<ReturnReceipt> {
        let mut tx = self.db.begin().await?;

        // 貸出レコードをロックする。同じ貸出の二重返却は
        // 後続側がここで待たされ、削除済みの行は見つからない
        let loan: Loan = sqlx::query_as!(
            LoanRow,
            r#"
                SELECT loan_id, book_id, member_id, book_title, member_name, borrowed_on, due_on
                FROM loans
                WHERE loan_id = $1
                FOR UPDATE
                ;
            "#,
            event.loan_id as _,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Loan::from)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("Loan ({}) was not found.", event.loan_id))
        })?;

        let fine = OverdueFine::assess(loan.due_on, event.returned_on);

        let res = sqlx::query!(
            "UPDATE books SET available = available + 1 WHERE book_id = $1",
            loan.book_id as _,
        )
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No book record has been updated".into(),
            ));
        }

        // 延滞金は上書きせず加算する
        let res = sqlx::query!(
            r#"
                UPDATE members SET
                books_borrowed = books_borrowed - 1,
                outstanding_fine = outstanding_fine + $2
                WHERE member_id = $1
                ;
            "#,
            loan.member_id as _,
            fine.amount,
        )
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No member record has been updated".into(),
            ));
        }

        let res = sqlx::query!("DELETE FROM loans WHERE loan_id = $1", loan.id as _)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No loan record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            loan.id = %loan.id,
            book.id = %loan.book_id,
            member.id = %loan.member_id,
            fine.days = fine.days,
            fine.amount = fine.amount,
            "book returned"
        );

        Ok(ReturnReceipt { loan, fine })
    }

    // すべての貸出中の情報を取得
    async fn find_active_all(&self) -> AppResult<Vec<Loan>> {
        sqlx::query_as!(
            LoanRow,
            r#"
                SELECT loan_id, book_id, member_id, book_title, member_name, borrowed_on, due_on
                FROM loans
                ORDER BY borrowed_on ASC, due_on ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Loan::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // 特定の会員の貸出中の情報を取得
    async fn find_active_by_member_id(&self, member_id: MemberId) -> AppResult<Vec<Loan>> {
        // find_active_all の SQL に `WHERE member_id = $1` を足しただけ
        sqlx::query_as!(
            LoanRow,
            r#"
                SELECT loan_id, book_id, member_id, book_title, member_name, borrowed_on, due_on
                FROM loans
                WHERE member_id = $1
                ORDER BY borrowed_on ASC, due_on ASC
                ;
            "#,
            member_id as _,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Loan::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    // 特定の蔵書の貸出中の情報を取得
    async fn find_active_by_book_id(&self, book_id: BookId) -> AppResult<Vec<Loan>> {
        sqlx::query_as!(
            LoanRow,
            r#"
                SELECT loan_id, book_id, member_id, book_title, member_name, borrowed_on, due_on
                FROM loans
                WHERE book_id = $1
                ORDER BY borrowed_on ASC, due_on ASC
                ;
            "#,
            book_id as _,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Loan::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

impl LoanRepositoryImpl {
    // 借り手の会員を特定する。ユーザーIDで指定された場合に
    // 会員プロフィールが無ければ貸出は許可しない
    async fn find_borrower(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        borrower: Borrower,
    ) -> AppResult<BorrowerRow> {
        match borrower {
            Borrower::Member(member_id) => sqlx::query_as!(
                BorrowerRow,
                "SELECT member_id, name FROM members WHERE member_id = $1",
                member_id as _,
            )
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Member ({}) was not found.", member_id))
            }),
            Borrower::User(user_id) => sqlx::query_as!(
                BorrowerRow,
                "SELECT member_id, name FROM members WHERE user_id = $1",
                user_id as _,
            )
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?
            .ok_or_else(|| {
                AppError::ForbiddenOperation(format!(
                    "No member profile is linked to user ({}).",
                    user_id
                ))
            }),
        }
    }
}
