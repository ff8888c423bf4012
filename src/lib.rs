//! Dinero is a small backend for keeping track of the debts and bills of its users.
//!
//! This library provides a JSON REST API over two resources, users and the accounts they track,
//! backed by a SQLite database.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod account;
mod app_state;
mod context;
mod database_id;
mod db;
pub mod endpoints;
mod json;
mod logging;
mod response;
mod routing;
mod stores;
mod user;
mod validation;

#[cfg(test)]
mod test_utils;

pub use account::{Account, AccountId, NewAccount};
pub use app_state::{AppState, SQLAppState};
pub use database_id::DatabaseId;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, MAX_BODY_BYTES, logging_middleware};
pub use response::status_text_response;
pub use routing::build_router;
pub use stores::{
    AccountStore, UserStore,
    sqlite::{SQLiteAccountStore, SQLiteUserStore},
};
pub use user::{NewUser, User, UserId};
pub use validation::{validate_account, validate_user};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The ID in the request path is not a non-negative integer.
    #[error("\"{0}\" is not a valid resource ID")]
    InvalidResourceId(String),

    /// The request body is not valid JSON, is missing a required field, or has a field of the
    /// wrong type.
    #[error("could not parse the request body: {0}")]
    MalformedBody(String),

    /// The account is well-formed JSON but one of its fields broke a validation rule.
    #[error("the account failed validation")]
    InvalidAccount,

    /// The user is well-formed JSON but one of their fields broke a validation rule.
    #[error("the user failed validation")]
    InvalidUser,

    /// A handler that needs the ID from the path was reached without the middleware that
    /// parses it.
    #[error("the resource ID is missing from the request context")]
    MissingResourceId,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The user already has an account with the same name.
    #[error("the account name is already in use for this user")]
    DuplicateAccountName,

    /// The email is already in use by another user.
    #[error("the email is already in use")]
    DuplicateEmail,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("users.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("accounts.") =>
            {
                Error::DuplicateAccountName
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            // Logged once the error is turned into a response.
            error => Error::SqlError(error),
        }
    }
}

impl Error {
    /// The HTTP status code a client receives for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidResourceId(_) | Error::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Error::InvalidAccount | Error::InvalidUser | Error::MissingResourceId => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::DuplicateAccountName | Error::DuplicateEmail => StatusCode::CONFLICT,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server errors are logged here and never shown to the client.
        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        status_text_response(status)
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use rusqlite::Connection;

    use crate::{Error, initialize_db};

    fn must_create_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        connection
    }

    #[test]
    fn classifies_duplicate_email() {
        let connection = must_create_test_connection();
        let insert = "INSERT INTO users (first_name, last_name, full_name, email, biweekly_income) \
            VALUES ('a', 'b', 'a b', 'a@b.com', 0)";
        connection.execute(insert, ()).unwrap();

        let error = connection.execute(insert, ()).unwrap_err();

        assert_eq!(Error::from(error), Error::DuplicateEmail);
    }

    #[test]
    fn classifies_duplicate_account_name() {
        let connection = must_create_test_connection();
        let insert = "INSERT INTO accounts (user_id, name, account_type, minimum_payment, \
            current_payment, full_amount, due_date, url) \
            VALUES (1, 'Rent', 'monthly', 1, 1, 1, '1', '')";
        connection.execute(insert, ()).unwrap();

        let error = connection.execute(insert, ()).unwrap_err();

        assert_eq!(Error::from(error), Error::DuplicateAccountName);
    }

    #[test]
    fn classifies_no_rows_as_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }

    #[test]
    fn other_sql_errors_are_kept() {
        let connection = must_create_test_connection();

        let error = connection.execute("SELECT * FROM nope", ()).unwrap_err();

        assert!(matches!(Error::from(error), Error::SqlError(_)));
    }

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (Error::InvalidResourceId("x".to_owned()), StatusCode::BAD_REQUEST),
            (Error::MalformedBody("x".to_owned()), StatusCode::BAD_REQUEST),
            (Error::InvalidAccount, StatusCode::UNPROCESSABLE_ENTITY),
            (Error::InvalidUser, StatusCode::UNPROCESSABLE_ENTITY),
            (Error::MissingResourceId, StatusCode::UNPROCESSABLE_ENTITY),
            (Error::NotFound, StatusCode::NOT_FOUND),
            (Error::DuplicateAccountName, StatusCode::CONFLICT),
            (Error::DuplicateEmail, StatusCode::CONFLICT),
            (
                Error::SqlError(rusqlite::Error::InvalidQuery),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (Error::DatabaseLockError, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, want) in cases {
            assert_eq!(error.status_code(), want, "{error:?}");
            assert_eq!(error.into_response().status(), want);
        }
    }
}
