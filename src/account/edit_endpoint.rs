//! Defines the endpoint for replacing an account, or creating it if it does not exist.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    account::{AccountId, NewAccount},
    app_state::AccountState,
    context::AccountContext,
    json::parse_json_body,
    response::Upsert,
    stores::AccountStore,
    validation::validate_account,
};

/// A route handler for replacing the account with the ID in the path.
///
/// If there is no account with that ID, the body is stored as a new account instead and the
/// handler responds with 201 Created. The new account gets an ID from the store, which may not
/// be the one in the path. Replacing an existing account responds with 204 No Content.
pub async fn edit_account_endpoint<A>(
    State(state): State<AccountState<A>>,
    context: AccountContext,
    body: Bytes,
) -> Response
where
    A: AccountStore + Clone + Send + Sync + 'static,
{
    match upsert_account(context.account_id, &body, &state.account_store) {
        Ok(outcome) => outcome.into_response(),
        Err(error) => error.into_response(),
    }
}

fn upsert_account(
    id: AccountId,
    body: &[u8],
    store: &impl AccountStore,
) -> Result<Upsert, Error> {
    let account: NewAccount = parse_json_body(body)?;

    if !validate_account(&account) {
        tracing::debug!("rejecting invalid account: {account:?}");
        return Err(Error::InvalidAccount);
    }

    match store.get(id) {
        Ok(_) => {
            store.update(id, &account)?;
            Ok(Upsert::Updated)
        }
        Err(Error::NotFound) => {
            let created = store.create(account)?;
            tracing::info!("account {id} did not exist, created account {}", created.id);
            Ok(Upsert::Created)
        }
        Err(error) => Err(error),
    }
}
