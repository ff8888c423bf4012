//! Defines the endpoint for getting a single account.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{app_state::AccountState, context::AccountContext, stores::AccountStore};

/// A route handler for getting an account by the ID in the path.
///
/// Responds with 404 Not Found if the account does not exist.
pub async fn get_account_endpoint<A>(
    State(state): State<AccountState<A>>,
    context: AccountContext,
) -> Response
where
    A: AccountStore + Clone + Send + Sync + 'static,
{
    match state.account_store.get(context.account_id) {
        Ok(account) => Json(account).into_response(),
        Err(error) => error.into_response(),
    }
}
