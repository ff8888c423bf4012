//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, HttpBody, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header::CONTENT_LENGTH, request, response},
    middleware::Next,
    response::Response,
};

use crate::response::status_text_response;

/// The number of bytes of a body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body the server accepts, matching axum's default body limit.
///
/// Response bodies over this size, or of unknown size, are passed through without being logged.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Requests with a body larger than [MAX_BODY_BYTES] are answered with 413 Payload Too Large
/// without reaching the handler.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    if content_length(&parts.headers).is_some_and(|length| length > MAX_BODY_BYTES) {
        tracing::warn!("rejecting request with a body over {MAX_BODY_BYTES} bytes");
        return status_text_response(StatusCode::PAYLOAD_TOO_LARGE);
    }

    // Fails when the body turns out to be over the limit without declaring its length.
    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(error) => {
            tracing::warn!("could not read request body: {error}");
            return status_text_response(StatusCode::PAYLOAD_TOO_LARGE);
        }
    };
    log_request(&parts, &body);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let fits = body
        .size_hint()
        .upper()
        .is_some_and(|upper| upper <= MAX_BODY_BYTES as u64);

    if !fits {
        tracing::info!("Sending response: {parts:#?}\nbody: <not logged>");
        return Response::from_parts(parts, body);
    }

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return status_text_response(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    log_response(&parts, &body);

    Response::from_parts(parts, Body::from(body))
}

fn content_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// The body as text, cut to [LOG_BODY_LENGTH_LIMIT] bytes.
///
/// Returns `None` if the body is within the limit.
fn truncated_body(body: &[u8]) -> Option<String> {
    (body.len() > LOG_BODY_LENGTH_LIMIT)
        .then(|| String::from_utf8_lossy(&body[..LOG_BODY_LENGTH_LIMIT]).into_owned())
}

fn log_request(parts: &request::Parts, body: &Bytes) {
    match truncated_body(body) {
        Some(truncated) => {
            tracing::info!("Received request: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full request body: {:?}", String::from_utf8_lossy(body));
        }
        None => tracing::info!(
            "Received request: {parts:#?}\nbody: {:?}",
            String::from_utf8_lossy(body)
        ),
    }
}

fn log_response(parts: &response::Parts, body: &Bytes) {
    match truncated_body(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {parts:#?}\nbody: {truncated}...");
            tracing::debug!("Full response body: {:?}", String::from_utf8_lossy(body));
        }
        None => tracing::info!(
            "Sending response: {parts:#?}\nbody: {:?}",
            String::from_utf8_lossy(body)
        ),
    }
}
