//! Implements a SQLite backed account store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, params};

use crate::{
    Error,
    account::{Account, AccountId, NewAccount, map_row_to_account},
    stores::AccountStore,
};

use super::lock_connection;

/// Stores accounts in the `accounts` table.
#[derive(Debug, Clone)]
pub struct SQLiteAccountStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteAccountStore {
    /// Create a new account store.
    ///
    /// The `accounts` table must already exist, see [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl AccountStore for SQLiteAccountStore {
    fn get_all(&self) -> Result<Vec<Account>, Error> {
        let connection = lock_connection(&self.connection)?;

        let mut statement = connection.prepare(
            "SELECT id, user_id, name, account_type, minimum_payment, current_payment, \
            full_amount, due_date, url FROM accounts ORDER BY id",
        )?;

        statement
            .query_map([], map_row_to_account)?
            .map(|maybe_account| maybe_account.map_err(Error::from))
            .collect()
    }

    fn get(&self, id: AccountId) -> Result<Account, Error> {
        let connection = lock_connection(&self.connection)?;

        get_account(id, &connection)
    }

    /// Insert the account and read it back so the caller sees exactly what was stored.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateAccountName] if the user already has an account with this name,
    /// or [Error::SqlError] for any other SQL error.
    fn create(&self, account: NewAccount) -> Result<Account, Error> {
        let connection = lock_connection(&self.connection)?;

        connection.execute(
            "INSERT INTO accounts (user_id, name, account_type, minimum_payment, current_payment, \
            full_amount, due_date, url) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                account.user_id,
                account.name,
                account.account_type,
                account.minimum_payment,
                account.current_payment,
                account.full_amount,
                account.due_date,
                account.url,
            ],
        )?;

        get_account(connection.last_insert_rowid(), &connection)
    }

    fn update(&self, id: AccountId, account: &NewAccount) -> Result<(), Error> {
        let connection = lock_connection(&self.connection)?;

        connection.execute(
            "UPDATE accounts \
            SET user_id = ?1, \
                name = ?2, \
                account_type = ?3, \
                minimum_payment = ?4, \
                current_payment = ?5, \
                full_amount = ?6, \
                due_date = ?7, \
                url = ?8 \
            WHERE id = ?9",
            params![
                account.user_id,
                account.name,
                account.account_type,
                account.minimum_payment,
                account.current_payment,
                account.full_amount,
                account.due_date,
                account.url,
                id,
            ],
        )?;

        Ok(())
    }

    fn delete(&self, id: AccountId) -> Result<(), Error> {
        let connection = lock_connection(&self.connection)?;

        let rows_affected =
            connection.execute("DELETE FROM accounts WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}

fn get_account(id: AccountId, connection: &Connection) -> Result<Account, Error> {
    connection
        .query_one(
            "SELECT id, user_id, name, account_type, minimum_payment, current_payment, \
            full_amount, due_date, url FROM accounts WHERE id = ?1",
            params![id],
            map_row_to_account,
        )
        .map_err(Error::from)
}
