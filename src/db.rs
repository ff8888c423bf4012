//! Creates the application's tables in a SQLite database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, account::create_account_table, user::create_user_table};

/// Create the tables for the domain models if they do not already exist.
///
/// Both tables are created inside one exclusive transaction, so either both exist afterwards or
/// neither was created.
///
/// # Errors
/// Returns an [Error::SqlError] if the transaction could not be started, a table could not be
/// created, or the transaction could not be committed.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_user_table(&transaction)?;
    create_account_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
