//! Defines the endpoint for deleting an account.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    app_state::AccountState, context::AccountContext, response::empty_response,
    stores::AccountStore,
};

/// A route handler for deleting the account with the ID in the path.
///
/// Responds with 204 No Content on success and 404 Not Found if there was no such account.
pub async fn delete_account_endpoint<A>(
    State(state): State<AccountState<A>>,
    context: AccountContext,
) -> Response
where
    A: AccountStore + Clone + Send + Sync + 'static,
{
    match state.account_store.delete(context.account_id) {
        Ok(()) => empty_response(StatusCode::NO_CONTENT),
        Err(error) => {
            tracing::debug!("could not delete account {}: {error}", context.account_id);
            error.into_response()
        }
    }
}
