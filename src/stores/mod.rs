//! Contains traits and implementations for objects that store [accounts](crate::account::Account)
//! and [users](crate::user::User).

mod account;
mod user;

pub mod sqlite;

pub use account::AccountStore;
pub use user::UserStore;
