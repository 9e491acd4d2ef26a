use chrono::NaiveDate;

use super::id::{BookId, LoanId, MemberId};

pub mod event;

/// Fine charged per overdue day, in currency units.
pub const DAILY_FINE_RATE: i64 = 100;

/// An outstanding borrow. `book_title` and `member_name` are snapshots taken
/// at borrow time and are not updated when the book or member is renamed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub book_title: String,
    pub member_name: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverdueFine {
    pub days: i64,
    pub amount: i64,
}

impl OverdueFine {
    /// Fine for a loan due on `due_on` and returned on `returned_on`.
    /// Nothing is charged on or before the due date; there is no grace period.
    pub fn assess(due_on: NaiveDate, returned_on: NaiveDate) -> Self {
        if returned_on <= due_on {
            return Self::default();
        }
        let days = (returned_on - due_on).num_days();
        Self {
            days,
            amount: days * DAILY_FINE_RATE,
        }
    }

    pub fn is_charged(&self) -> bool {
        self.amount > 0
    }
}

// 返却処理の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub loan: Loan,
    pub fine: OverdueFine,
}

impl ReturnReceipt {
    pub fn message(&self) -> String {
        if self.fine.is_charged() {
            format!(
                "Book returned with a fine of {} for {} day(s) overdue.",
                self.fine.amount, self.fine.days
            )
        } else {
            "Book returned successfully.".to_string()
        }
    }
}
