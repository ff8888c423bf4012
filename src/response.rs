//! Bare status responses for errors and for writes that do not return a body.

use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// A response whose body is the reason phrase for `status` followed by a newline,
/// e.g. "Not Found\n".
pub fn status_text_response(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or_default();

    (status, [(CONTENT_TYPE, PLAIN_TEXT)], format!("{reason}\n")).into_response()
}

/// A response with `status`, a plain text content type and no body.
pub fn empty_response(status: StatusCode) -> Response {
    (status, [(CONTENT_TYPE, PLAIN_TEXT)]).into_response()
}

/// What a PUT to a single resource did.
///
/// A PUT to an ID that does not exist creates a new resource, whose ID is assigned by the store
/// and may differ from the ID in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No resource had the ID, so a new one was created. Responds with 201 Created.
    Created,
    /// The existing resource was replaced. Responds with 204 No Content.
    Updated,
}

impl IntoResponse for Upsert {
    fn into_response(self) -> Response {
        match self {
            Upsert::Created => empty_response(StatusCode::CREATED),
            Upsert::Updated => empty_response(StatusCode::NO_CONTENT),
        }
    }
}
