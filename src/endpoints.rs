//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/accounts/{account_id}', use [format_endpoint].

use crate::database_id::DatabaseId;

/// The collection of accounts a user tracks.
pub const ACCOUNTS: &str = "/accounts";
/// A single account.
pub const ACCOUNT: &str = "/accounts/{account_id}";
/// The collection of users.
pub const USERS: &str = "/users";
/// A single user.
pub const USER: &str = "/users/{user_id}";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: DatabaseId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
