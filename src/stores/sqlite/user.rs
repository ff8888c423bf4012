//! Implements a SQLite backed user store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, params};

use crate::{
    Error,
    stores::UserStore,
    user::{NewUser, User, UserId, map_row_to_user},
};

use super::lock_connection;

/// Stores users in the `users` table.
#[derive(Debug, Clone)]
pub struct SQLiteUserStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteUserStore {
    /// Create a new user store.
    ///
    /// The `users` table must already exist, see [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl UserStore for SQLiteUserStore {
    fn get_all(&self) -> Result<Vec<User>, Error> {
        let connection = lock_connection(&self.connection)?;
        let mut statement = connection.prepare(
            "SELECT id, first_name, last_name, full_name, email, biweekly_income \
            FROM users ORDER BY id",
        )?;

        statement
            .query_map([], map_row_to_user)?
            .map(|maybe_user| maybe_user.map_err(Error::from))
            .collect()
    }

    /// Get the user that has the specified `id`, or return [Error::NotFound] if such user does not exist.
    fn get(&self, id: UserId) -> Result<User, Error> {
        let connection = lock_connection(&self.connection)?;

        get_user(id, &connection)
    }

    /// Insert the user and read them back so the caller sees exactly what was stored.
    ///
    /// # Errors
    ///
    /// Returns [Error::DuplicateEmail] if the email is taken, or [Error::SqlError] if any
    /// other SQL related error occurred.
    fn create(&self, user: NewUser) -> Result<User, Error> {
        let connection = lock_connection(&self.connection)?;

        connection.execute(
            "INSERT INTO users (first_name, last_name, full_name, email, biweekly_income) \
            VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                user.first_name,
                user.last_name,
                user.full_name,
                user.email,
                user.biweekly_income,
            ],
        )?;

        get_user(connection.last_insert_rowid(), &connection)
    }

    fn update(&self, id: UserId, user: &NewUser) -> Result<(), Error> {
        let connection = lock_connection(&self.connection)?;

        connection.execute(
            "UPDATE users \
            SET first_name = ?1, \
                last_name = ?2, \
                full_name = ?3, \
                email = ?4, \
                biweekly_income = ?5 \
            WHERE id = ?6",
            params![
                user.first_name,
                user.last_name,
                user.full_name,
                user.email,
                user.biweekly_income,
                id,
            ],
        )?;

        Ok(())
    }
}

fn get_user(id: UserId, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare(
            "SELECT id, first_name, last_name, full_name, email, biweekly_income \
            FROM users WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_row_to_user)
        .map_err(Error::from)
}
