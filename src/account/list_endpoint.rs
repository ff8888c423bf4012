//! Defines the endpoint for listing every account.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{app_state::AccountState, stores::AccountStore};

/// A route handler that responds with every account as a JSON array.
///
/// An empty store gives `[]`.
pub async fn list_accounts_endpoint<A>(State(state): State<AccountState<A>>) -> Response
where
    A: AccountStore + Clone + Send + Sync + 'static,
{
    match state.account_store.get_all() {
        Ok(accounts) => Json(accounts).into_response(),
        Err(error) => error.into_response(),
    }
}
