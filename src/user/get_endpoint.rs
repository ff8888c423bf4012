//! Defines the endpoint for getting a single user.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{app_state::UserState, context::UserContext, stores::UserStore};

/// A route handler for getting a user by the ID in the path.
///
/// This function will return the status code 404 if the requested user does not exist.
pub async fn get_user_endpoint<U>(
    State(state): State<UserState<U>>,
    context: UserContext,
) -> Response
where
    U: UserStore + Clone + Send + Sync + 'static,
{
    match state.user_store.get(context.user_id) {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}
