use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::database_id::DatabaseId;

/// The store assigned identifier of a [User].
pub type UserId = DatabaseId;

/// A person who tracks their accounts with the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The id for the user, assigned by the store.
    #[serde(rename = "ID")]
    pub id: UserId,
    /// The user's given name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// The user's family name.
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// The name the user goes by in full.
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Unique across all users.
    pub email: String,
    /// Income received every two weeks.
    #[serde(rename = "biweeklyIncome")]
    pub biweekly_income: f64,
}

/// The fields a client submits to create or replace a [User].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// See [User::first_name].
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// See [User::last_name].
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// See [User::full_name].
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Must not belong to another user.
    pub email: String,
    /// See [User::biweekly_income].
    #[serde(rename = "biweeklyIncome")]
    pub biweekly_income: f64,
}

impl NewUser {
    /// Attach the store assigned `id`.
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            full_name: self.full_name,
            email: self.email,
            biweekly_income: self.biweekly_income,
        }
    }
}

pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            biweekly_income REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_user(row: &Row) -> Result<User, rusqlite::Error> {
    let id = row.get(0)?;
    let first_name = row.get(1)?;
    let last_name = row.get(2)?;
    let full_name = row.get(3)?;
    let email = row.get(4)?;
    let biweekly_income = row.get(5)?;

    Ok(User {
        id,
        first_name,
        last_name,
        full_name,
        email,
        biweekly_income,
    })
}
