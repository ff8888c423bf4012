//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    stores::{
        AccountStore, UserStore,
        sqlite::{SQLiteAccountStore, SQLiteUserStore},
    },
};

/// The state of the REST server.
///
/// This is the application context every handler receives; the stores are the only state
/// shared between requests.
#[derive(Debug, Clone)]
pub struct AppState<A, U>
where
    A: AccountStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    /// The store for managing [accounts](crate::Account).
    pub account_store: A,
    /// The store for managing [users](crate::User).
    pub user_store: U,
}

impl<A, U> AppState<A, U>
where
    A: AccountStore + Send + Sync,
    U: UserStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(account_store: A, user_store: U) -> Self {
        Self {
            account_store,
            user_store,
        }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteAccountStore, SQLiteUserStore>;

impl SQLAppState {
    /// Create an [AppState] whose stores share `db_connection`.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn from_connection(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self::new(
            SQLiteAccountStore::new(connection.clone()),
            SQLiteUserStore::new(connection),
        ))
    }
}

/// The state needed by the account route handlers.
#[derive(Debug, Clone)]
pub struct AccountState<A>
where
    A: AccountStore + Send + Sync,
{
    /// The store for managing [accounts](crate::Account).
    pub account_store: A,
}

impl<A, U> FromRef<AppState<A, U>> for AccountState<A>
where
    A: AccountStore + Clone + Send + Sync,
    U: UserStore + Send + Sync,
{
    fn from_ref(state: &AppState<A, U>) -> Self {
        Self {
            account_store: state.account_store.clone(),
        }
    }
}

/// The state needed by the user route handlers.
#[derive(Debug, Clone)]
pub struct UserState<U>
where
    U: UserStore + Send + Sync,
{
    /// The store for managing [users](crate::User).
    pub user_store: U,
}

impl<A, U> FromRef<AppState<A, U>> for UserState<U>
where
    A: AccountStore + Send + Sync,
    U: UserStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<A, U>) -> Self {
        Self {
            user_store: state.user_store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{AccountStore, UserStore};

    use super::SQLAppState;

    #[test]
    fn from_connection_initializes_database() {
        let connection = Connection::open_in_memory().unwrap();

        let state = SQLAppState::from_connection(connection).unwrap();

        assert_eq!(state.account_store.get_all(), Ok(vec![]));
        assert_eq!(state.user_store.get_all(), Ok(vec![]));
    }
}
