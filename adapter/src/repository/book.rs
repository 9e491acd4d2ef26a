use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book::{
            event::{CreateBook, DeleteBook, UpdateBook},
            Book, BookListOptions,
        },
        id::BookId,
    },
    repository::book::BookRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{conflict_on_unique_violation, model::book::BookRow, ConnectionPool};

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(&self, event: CreateBook) -> AppResult<Book> {
        let book_id = BookId::new();
        sqlx::query_as!(
            BookRow,
            r#"
                INSERT INTO books
                (book_id, title, author, isbn, genre, year, copies, available, cover_url)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $7, $8)
                RETURNING book_id, title, author, isbn, genre, year, copies, available, cover_url
                ;
            "#,
            book_id as _,
            event.title,
            event.author,
            event.isbn,
            event.genre,
            event.year,
            event.copies,
            event.cover_url,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map(Book::from)
        .map_err(|e| {
            conflict_on_unique_violation(
                e,
                format!(
                    "A book with ISBN {} already exists.",
                    event.isbn.as_deref().unwrap_or_default()
                ),
            )
        })
    }

    async fn find_all(&self, options: BookListOptions) -> AppResult<Vec<Book>> {
        // 大文字小文字の区別は DB の照合順序に任せる
        sqlx::query_as!(
            BookRow,
            r#"
                SELECT book_id, title, author, isbn, genre, year, copies, available, cover_url
                FROM books
                WHERE $1::TEXT IS NULL
                OR title LIKE '%' || $1 || '%'
                OR author LIKE '%' || $1 || '%'
                OR genre LIKE '%' || $1 || '%'
                OR CAST(year AS TEXT) LIKE '%' || $1 || '%'
                ORDER BY title ASC, book_id ASC
                ;
            "#,
            options.query,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Book::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        sqlx::query_as!(
            BookRow,
            r#"
                SELECT book_id, title, author, isbn, genre, year, copies, available, cover_url
                FROM books
                WHERE book_id = $1
                ;
            "#,
            book_id as _,
        )
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Book::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateBook) -> AppResult<Book> {
        let mut tx = self.db.begin().await?;

        // 貸出と競合しないよう行ロックを取ってから現在の冊数を読む
        let current: Book = sqlx::query_as!(
            BookRow,
            r#"
                SELECT book_id, title, author, isbn, genre, year, copies, available, cover_url
                FROM books
                WHERE book_id = $1
                FOR UPDATE
                ;
            "#,
            event.book_id as _,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Book::from)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("Book ({}) was not found.", event.book_id))
        })?;

        let available = current.recompute_available(event.copies)?;

        let updated = sqlx::query_as!(
            BookRow,
            r#"
                UPDATE books SET
                title = $2,
                author = $3,
                isbn = $4,
                genre = $5,
                year = $6,
                copies = $7,
                available = $8,
                cover_url = $9
                WHERE book_id = $1
                RETURNING book_id, title, author, isbn, genre, year, copies, available, cover_url
                ;
            "#,
            event.book_id as _,
            event.title,
            event.author,
            event.isbn,
            event.genre,
            event.year,
            event.copies,
            available,
            event.cover_url,
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            conflict_on_unique_violation(
                e,
                format!(
                    "A book with ISBN {} already exists.",
                    event.isbn.as_deref().unwrap_or_default()
                ),
            )
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(updated.into())
    }

    async fn delete(&self, event: DeleteBook) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let locked = sqlx::query_scalar!(
            "SELECT book_id FROM books WHERE book_id = $1 FOR UPDATE",
            event.book_id as _,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if locked.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "Book ({}) was not found.",
                event.book_id
            )));
        }

        let active_loans = sqlx::query_scalar!(
            r#"SELECT COUNT(*) AS "count!" FROM loans WHERE book_id = $1"#,
            event.book_id as _,
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if active_loans > 0 {
            return Err(AppError::Conflict(format!(
                "Book ({}) cannot be deleted while {} loan(s) are outstanding.",
                event.book_id, active_loans
            )));
        }

        let res = sqlx::query!("DELETE FROM books WHERE book_id = $1", event.book_id as _)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No book record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}
