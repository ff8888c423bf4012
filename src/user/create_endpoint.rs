//! Defines the endpoint for creating a user.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    app_state::UserState,
    json::parse_json_body,
    stores::UserStore,
    user::{NewUser, User},
    validation::validate_user,
};

/// A route handler for creating a new user, responds with the stored user as JSON.
///
/// Responds with 400 Bad Request if the body cannot be parsed, 422 Unprocessable Entity if the
/// user fails validation and 409 Conflict if the email is already taken.
pub async fn create_user_endpoint<U>(State(state): State<UserState<U>>, body: Bytes) -> Response
where
    U: UserStore + Clone + Send + Sync + 'static,
{
    match create_user(&body, &state.user_store) {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}

fn create_user(body: &[u8], store: &impl UserStore) -> Result<User, Error> {
    let user: NewUser = parse_json_body(body)?;

    if !validate_user(&user) {
        tracing::debug!("rejecting invalid user: {user:?}");
        return Err(Error::InvalidUser);
    }

    store.create(user)
}

#[cfg(test)]
mod tests {
    use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};

    use crate::{
        app_state::UserState,
        stores::UserStore,
        test_utils::{FakeStore, assert_content_type, must_read_body},
        user::{
            User,
            test_data::{JOHN_JSON, john},
        },
    };

    use super::create_user_endpoint;

    async fn post(store: FakeStore, body: &'static str) -> Response {
        create_user_endpoint(
            State(UserState { user_store: store }),
            Bytes::from_static(body.as_bytes()),
        )
        .await
    }

    #[tokio::test]
    async fn responds_with_stored_user() {
        let store = FakeStore::new();

        let response = post(store.clone(), JOHN_JSON).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "application/json");
        let got: User = serde_json::from_str(&must_read_body(response).await).unwrap();
        assert_eq!(got, john().with_id(1));
        assert_eq!(UserStore::get(&store, got.id), Ok(got));
    }

    #[tokio::test]
    async fn client_supplied_id_is_ignored() {
        let store = FakeStore::new();

        let response = post(
            store,
            r#"{"ID":99,"firstName":"John","lastName":"Smith","fullName":"John Smith","email":"john.smith@example.com","biweeklyIncome":2000}"#,
        )
        .await;

        let got: User = serde_json::from_str(&must_read_body(response).await).unwrap();
        assert_eq!(got.id, 1);
    }

    #[tokio::test]
    async fn malformed_json_gives_bad_request() {
        let response = post(FakeStore::new(), "{").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(must_read_body(response).await, "Bad Request\n");
    }

    #[tokio::test]
    async fn missing_field_gives_bad_request() {
        let response = post(
            FakeStore::new(),
            r#"{"firstName":"John","lastName":"Smith","fullName":"John Smith","biweeklyIncome":2000}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_user_gives_unprocessable_entity() {
        let store = FakeStore::new();

        let response = post(
            store.clone(),
            r#"{"firstName":"John","lastName":"Smith","fullName":"John Smith","email":"not an email","biweeklyIncome":2000}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(must_read_body(response).await, "Unprocessable Entity\n");
        assert_eq!(UserStore::get_all(&store), Ok(vec![]));
    }

    #[tokio::test]
    async fn duplicate_email_gives_conflict() {
        let store = FakeStore::new();
        UserStore::create(&store, john()).unwrap();

        let response = post(store, JOHN_JSON).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(must_read_body(response).await, "Conflict\n");
    }

    #[tokio::test]
    async fn store_error_gives_internal_server_error() {
        let response = post(FakeStore::failing(), JOHN_JSON).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
