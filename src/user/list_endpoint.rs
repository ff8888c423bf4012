//! Defines the endpoint for listing every user.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{app_state::UserState, stores::UserStore};

/// A route handler that responds with every user as a JSON array.
pub async fn list_users_endpoint<U>(State(state): State<UserState<U>>) -> Response
where
    U: UserStore + Clone + Send + Sync + 'static,
{
    match state.user_store.get_all() {
        Ok(users) => Json(users).into_response(),
        Err(error) => error.into_response(),
    }
}
