use rusqlite::{Connection, Row};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{database_id::DatabaseId, user::UserId};

/// The store assigned identifier of an [Account].
pub type AccountId = DatabaseId;

/// A debt or bill that a user wants to keep track of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// The id for the account, assigned by the store.
    #[serde(rename = "ID")]
    pub id: AccountId,
    /// The user that tracks this account.
    #[serde(rename = "userID")]
    pub user_id: UserId,
    /// The name of the account, unique per user.
    pub name: String,
    /// How often a payment is due, e.g. "monthly".
    #[serde(rename = "accountType")]
    pub account_type: String,
    /// The smallest payment that can be made.
    #[serde(rename = "minimumPayment")]
    pub minimum_payment: f64,
    /// The payment the user currently makes.
    #[serde(rename = "currentPayment")]
    pub current_payment: f64,
    /// The amount owing in total.
    #[serde(rename = "fullAmount")]
    pub full_amount: f64,
    /// The day of the month the payment is due, "1" through "31".
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// Where the account can be managed online.
    #[serde(rename = "URL")]
    pub url: String,
}

/// The fields a client submits to create or replace an [Account].
///
/// Every field is required except `URL`, which defaults to an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    /// See [Account::user_id].
    #[serde(rename = "userID")]
    pub user_id: UserId,
    /// See [Account::name].
    pub name: String,
    /// See [Account::account_type].
    #[serde(rename = "accountType")]
    pub account_type: String,
    /// See [Account::minimum_payment].
    #[serde(rename = "minimumPayment")]
    pub minimum_payment: f64,
    /// See [Account::current_payment].
    #[serde(rename = "currentPayment")]
    pub current_payment: f64,
    /// See [Account::full_amount].
    #[serde(rename = "fullAmount")]
    pub full_amount: f64,
    /// See [Account::due_date].
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// See [Account::url]. Missing or `null` is stored as an empty string.
    #[serde(rename = "URL", default, deserialize_with = "null_as_empty")]
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewAccount {
    /// Attach the store assigned `id`.
    pub fn with_id(self, id: AccountId) -> Account {
        Account {
            id,
            user_id: self.user_id,
            name: self.name,
            account_type: self.account_type,
            minimum_payment: self.minimum_payment,
            current_payment: self.current_payment,
            full_amount: self.full_amount,
            due_date: self.due_date,
            url: self.url,
        }
    }
}

pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            account_type TEXT NOT NULL,
            minimum_payment REAL NOT NULL,
            current_payment REAL NOT NULL,
            full_amount REAL NOT NULL,
            due_date TEXT NOT NULL,
            url TEXT NOT NULL,
            UNIQUE(user_id, name)
        )",
        (),
    )?;

    Ok(())
}

pub fn map_row_to_account(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        account_type: row.get(3)?,
        minimum_payment: row.get(4)?,
        current_payment: row.get(5)?,
        full_amount: row.get(6)?,
        due_date: row.get(7)?,
        url: row.get(8)?,
    })
}


#[cfg(test)]
mod serde_tests {
    use super::{Account, NewAccount};

    #[test]
    fn serializes_with_wire_field_names() {
        let account = Account {
            id: 1,
            user_id: 1,
            name: "Car Payment".to_owned(),
            account_type: "monthly".to_owned(),
            minimum_payment: 217.99,
            current_payment: 217.99,
            full_amount: 21000.0,
            due_date: "10".to_owned(),
            url: "ford.com".to_owned(),
        };

        let json = serde_json::to_string(&account).unwrap();

        assert_eq!(
            json,
            r#"{"ID":1,"userID":1,"name":"Car Payment","accountType":"monthly","minimumPayment":217.99,"currentPayment":217.99,"fullAmount":21000.0,"dueDate":"10","URL":"ford.com"}"#
        );
    }

    #[test]
    fn url_is_optional() {
        let account: NewAccount = serde_json::from_str(
            r#"{"userID":1,"name":"Rent","accountType":"monthly","minimumPayment":1,"currentPayment":1,"fullAmount":1,"dueDate":"1"}"#,
        )
        .unwrap();

        assert_eq!(account.url, "");
    }

    #[test]
    fn null_url_is_empty() {
        let account: NewAccount = serde_json::from_str(
            r#"{"userID":1,"name":"Rent","accountType":"monthly","minimumPayment":1,"currentPayment":1,"fullAmount":1,"dueDate":"1","URL":null}"#,
        )
        .unwrap();

        assert_eq!(account.url, "");
    }

    #[test]
    fn non_string_url_is_an_error() {
        let result = serde_json::from_str::<NewAccount>(
            r#"{"userID":1,"name":"Rent","accountType":"monthly","minimumPayment":1,"currentPayment":1,"fullAmount":1,"dueDate":"1","URL":5}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn ignores_client_supplied_id() {
        let account: NewAccount = serde_json::from_str(
            r#"{"ID":99,"userID":1,"name":"Rent","accountType":"monthly","minimumPayment":1,"currentPayment":1,"fullAmount":1,"dueDate":"1","URL":""}"#,
        )
        .unwrap();

        assert_eq!(account.with_id(3).id, 3);
    }

    #[test]
    fn missing_account_type_is_an_error() {
        let result = serde_json::from_str::<NewAccount>(
            r#"{"userID":1,"name":"Rent","minimumPayment":1,"currentPayment":1,"fullAmount":1,"dueDate":"1"}"#,
        );

        assert!(result.is_err());
    }
}
