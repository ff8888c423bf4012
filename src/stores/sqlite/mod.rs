//! SQLite backed implementations of the store traits.
//!
//! All stores share a single connection guarded by a mutex, which makes them safe to use from
//! concurrently handled requests.

mod account;
mod user;

pub use account::SQLiteAccountStore;
pub use user::SQLiteUserStore;

use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::Error;

fn lock_connection(connection: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, Error> {
    connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })
}
