//! Defines the endpoint for creating an account.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    account::{Account, NewAccount},
    app_state::AccountState,
    json::parse_json_body,
    stores::AccountStore,
    validation::validate_account,
};

/// A route handler for creating a new account, responds with the stored account as JSON.
///
/// Responds with 400 Bad Request if the body cannot be parsed, 422 Unprocessable Entity if the
/// account fails validation and 409 Conflict if the user already has an account with the
/// same name.
pub async fn create_account_endpoint<A>(State(state): State<AccountState<A>>, body: Bytes) -> Response
where
    A: AccountStore + Clone + Send + Sync + 'static,
{
    match create_account(&body, &state.account_store) {
        Ok(account) => Json(account).into_response(),
        Err(error) => error.into_response(),
    }
}

fn create_account(body: &[u8], store: &impl AccountStore) -> Result<Account, Error> {
    let account: NewAccount = parse_json_body(body)?;

    if !validate_account(&account) {
        tracing::debug!("rejecting invalid account: {account:?}");
        return Err(Error::InvalidAccount);
    }

    store.create(account)
}
