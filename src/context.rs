//! Middleware that parses the ID in a single-resource path once and hands it to the handler.
//!
//! The middleware places an [AccountContext] or [UserContext] into the request extensions.
//! Handlers receive it by taking the context type as an argument. If a handler is reached
//! without the middleware having run, extracting the context fails with
//! [Error::MissingResourceId].

use axum::{
    extract::{FromRequestParts, Path, Request, rejection::PathRejection},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{Error, account::AccountId, database_id::DatabaseId, user::UserId};

/// The account ID taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountContext {
    pub account_id: AccountId,
}

/// The user ID taken from the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: UserId,
}

/// Middleware for `/accounts/{account_id}` routes.
///
/// Responds with 400 Bad Request and does not call the handler if the ID is not a non-negative
/// integer.
pub async fn account_context(
    raw_id: Result<Path<String>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Response {
    match raw_id.map_err(rejected_id).and_then(|Path(raw_id)| parse_id(&raw_id)) {
        Ok(account_id) => {
            request.extensions_mut().insert(AccountContext { account_id });
            next.run(request).await
        }
        Err(error) => error.into_response(),
    }
}

/// Middleware for `/users/{user_id}` routes.
///
/// Responds with 400 Bad Request and does not call the handler if the ID is not a non-negative
/// integer.
pub async fn user_context(
    raw_id: Result<Path<String>, PathRejection>,
    mut request: Request,
    next: Next,
) -> Response {
    match raw_id.map_err(rejected_id).and_then(|Path(raw_id)| parse_id(&raw_id)) {
        Ok(user_id) => {
            request.extensions_mut().insert(UserContext { user_id });
            next.run(request).await
        }
        Err(error) => error.into_response(),
    }
}

fn parse_id(raw_id: &str) -> Result<DatabaseId, Error> {
    match raw_id.parse::<DatabaseId>() {
        Ok(id) if id >= 0 => Ok(id),
        _ => {
            tracing::debug!("rejecting path ID {raw_id:?}");
            Err(Error::InvalidResourceId(raw_id.to_owned()))
        }
    }
}

/// The path segment could not be decoded, e.g. it is not valid UTF-8 once percent-decoded.
fn rejected_id(rejection: PathRejection) -> Error {
    tracing::debug!("rejecting path ID: {rejection}");
    Error::InvalidResourceId(rejection.body_text())
}

fn take_context<T>(parts: &Parts) -> Result<T, Error>
where
    T: Copy + Send + Sync + 'static,
{
    parts.extensions.get::<T>().copied().ok_or_else(|| {
        tracing::error!(
            "handler for {} was called without its context middleware",
            parts.uri.path()
        );
        Error::MissingResourceId
    })
}

impl<S> FromRequestParts<S> for AccountContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        take_context(parts)
    }
}

impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        take_context(parts)
    }
}
