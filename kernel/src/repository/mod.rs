pub mod book;
pub mod health;
pub mod loan;
pub mod member;
pub mod stats;
pub mod user;
