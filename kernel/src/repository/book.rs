use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book::{
        event::{CreateBook, DeleteBook, UpdateBook},
        Book, BookListOptions,
    },
    id::BookId,
};

#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    // 蔵書登録。貸出可能数は蔵書数で初期化される
    async fn create(&self, event: CreateBook) -> AppResult<Book>;
    async fn find_all(&self, options: BookListOptions) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>>;
    // 蔵書数の変更に合わせて貸出可能数を再計算する
    async fn update(&self, event: UpdateBook) -> AppResult<Book>;
    // 貸出中の蔵書は削除できない
    async fn delete(&self, event: DeleteBook) -> AppResult<()>;
}
