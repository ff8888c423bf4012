//! Defines the endpoint for replacing a user, or creating them if they do not exist.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::UserState,
    context::UserContext,
    json::parse_json_body,
    response::Upsert,
    stores::UserStore,
    user::{NewUser, UserId},
    validation::validate_user,
};

/// A route handler for replacing the user with the ID in the path.
///
/// Responds with 204 No Content when an existing user was replaced, or 201 Created when no user
/// had the ID and the body was stored as a new user.
pub async fn edit_user_endpoint<U>(
    State(state): State<UserState<U>>,
    context: UserContext,
    body: Bytes,
) -> Response
where
    U: UserStore + Clone + Send + Sync + 'static,
{
    match upsert_user(context.user_id, &body, &state.user_store) {
        Ok(outcome) => outcome.into_response(),
        Err(error) => error.into_response(),
    }
}

fn upsert_user(id: UserId, body: &[u8], store: &impl UserStore) -> Result<Upsert, Error> {
    let user: NewUser = parse_json_body(body)?;

    if !validate_user(&user) {
        tracing::debug!("rejecting invalid user: {user:?}");
        return Err(Error::InvalidUser);
    }

    match store.get(id) {
        Ok(_) => {
            store.update(id, &user)?;
            Ok(Upsert::Updated)
        }
        Err(Error::NotFound) => {
            let created = store.create(user)?;
            tracing::info!("user {id} did not exist, created user {}", created.id);
            Ok(Upsert::Created)
        }
        Err(error) => Err(error),
    }
}
