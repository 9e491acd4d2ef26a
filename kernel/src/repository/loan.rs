use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::{BookId, MemberId},
    loan::{
        event::{CreateLoan, ReturnLoan},
        Loan, ReturnReceipt,
    },
};

#[mockall::automock]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    // 貸出
    async fn create(&self, event: CreateLoan) -> AppResult<Loan>;
    // 返却。貸出レコードは削除され、延滞金があれば会員に加算される
    async fn return_loan(&self, event: ReturnLoan) -> AppResult<ReturnReceipt>;
    // すべての貸出中の情報を取得
    async fn find_active_all(&self) -> AppResult<Vec<Loan>>;
    // 特定の会員の貸出中の情報を取得
    async fn find_active_by_member_id(&self, member_id: MemberId) -> AppResult<Vec<Loan>>;
    // 特定の蔵書の貸出中の情報を取得
    async fn find_active_by_book_id(&self, book_id: BookId) -> AppResult<Vec<Loan>>;
}
