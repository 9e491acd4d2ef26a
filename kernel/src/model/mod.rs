pub mod book;
pub mod id;
pub mod loan;
pub mod member;
pub mod role;
pub mod stats;
pub mod user;
