//! Decoding of JSON request bodies.

use serde::de::DeserializeOwned;

use crate::Error;

/// Parse a raw request body as JSON.
///
/// The content type of the request is not checked. Syntax errors, missing required fields and
/// fields of the wrong type all produce [Error::MalformedBody].
pub fn parse_json_body<T>(body: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        tracing::debug!("could not parse request body: {error}");
        Error::MalformedBody(error.to_string())
    })
}
